//! Required secrets.
//!
//! All three are read from the environment once at startup. Any missing or
//! empty value is fatal.

use std::fmt;

use crate::error::ConfigError;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// True only when all three secrets are present and non-empty.
#[must_use]
pub fn check_tokens(
    practicum_token: Option<&str>,
    telegram_token: Option<&str>,
    telegram_chat_id: Option<&str>,
) -> bool {
    [practicum_token, telegram_token, telegram_chat_id]
        .into_iter()
        .all(is_present)
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// The three secrets the bot needs.
#[derive(Clone)]
pub struct Credentials {
    /// Review API OAuth token.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Destination chat, numeric id or `@channel`.
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Read credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] naming every absent or
    /// empty variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Credentials::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let practicum_token = lookup(PRACTICUM_TOKEN);
        let telegram_token = lookup(TELEGRAM_TOKEN);
        let telegram_chat_id = lookup(TELEGRAM_CHAT_ID);

        match (practicum_token, telegram_token, telegram_chat_id) {
            (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id))
                if check_tokens(
                    Some(practicum_token.as_str()),
                    Some(telegram_token.as_str()),
                    Some(telegram_chat_id.as_str()),
                ) =>
            {
                Ok(Self {
                    practicum_token,
                    telegram_token,
                    telegram_chat_id,
                })
            }
            (practicum_token, telegram_token, telegram_chat_id) => {
                let names = [
                    (PRACTICUM_TOKEN, practicum_token),
                    (TELEGRAM_TOKEN, telegram_token),
                    (TELEGRAM_CHAT_ID, telegram_chat_id),
                ]
                .into_iter()
                .filter(|(_, value)| !is_present(value.as_deref()))
                .map(|(name, _)| name)
                .collect();
                Err(ConfigError::MissingCredentials { names })
            }
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &mask(&self.practicum_token))
            .field("telegram_token", &mask(&self.telegram_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Keep the last four characters of a secret.
fn mask(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "****".into();
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn check_tokens_requires_all_three() {
        assert!(check_tokens(Some("a"), Some("b"), Some("c")));
        assert!(!check_tokens(None, Some("b"), Some("c")));
        assert!(!check_tokens(Some("a"), None, Some("c")));
        assert!(!check_tokens(Some("a"), Some("b"), None));
        assert!(!check_tokens(Some(""), Some("b"), Some("c")));
        assert!(!check_tokens(Some("a"), Some("  "), Some("c")));
        assert!(!check_tokens(None, None, None));
    }

    #[test]
    fn loads_complete_credentials() {
        let creds = Credentials::from_lookup(lookup(&[
            (PRACTICUM_TOKEN, "y0_practicum"),
            (TELEGRAM_TOKEN, "123:abc"),
            (TELEGRAM_CHAT_ID, "42"),
        ]))
        .unwrap();
        assert_eq!(creds.practicum_token, "y0_practicum");
        assert_eq!(creds.telegram_token, "123:abc");
        assert_eq!(creds.telegram_chat_id, "42");
    }

    #[test]
    fn reports_every_missing_name() {
        let err = Credentials::from_lookup(lookup(&[(TELEGRAM_TOKEN, "123:abc")])).unwrap_err();
        match err {
            ConfigError::MissingCredentials { names } => {
                assert_eq!(names, vec![PRACTICUM_TOKEN, TELEGRAM_CHAT_ID]);
            }
            other => panic!("expected MissingCredentials, got {other}"),
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = Credentials::from_lookup(lookup(&[
            (PRACTICUM_TOKEN, ""),
            (TELEGRAM_TOKEN, "123:abc"),
            (TELEGRAM_CHAT_ID, "42"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingCredentials { ref names } if names == &[PRACTICUM_TOKEN]
        ));
    }

    #[test]
    fn debug_masks_tokens() {
        let creds = Credentials {
            practicum_token: "y0_supersecret".into(),
            telegram_token: "abc".into(),
            telegram_chat_id: "42".into(),
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("supersecret"));
        assert!(rendered.contains("****cret"));
        assert!(rendered.contains("\"****\""));
    }
}
