//! Non-secret runtime settings.
//!
//! Read from the environment with defaults; CLI flags may override them
//! afterwards. Secrets live in [`super::credentials`].

use std::time::Duration;

use url::Url;

use super::logging::LoggingConfig;
use crate::adapter::outbound::practicum::DEFAULT_ENDPOINT;
use crate::error::ConfigError;

/// Pause between polling cycles unless overridden.
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

pub const RETRY_PERIOD: &str = "RETRY_PERIOD";
pub const REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";
pub const PRACTICUM_ENDPOINT: &str = "PRACTICUM_ENDPOINT";

/// Runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Homework status endpoint.
    pub endpoint: Url,
    /// Sleep after every polling cycle.
    pub retry_period: Duration,
    /// Per-request timeout; `None` keeps the HTTP client default.
    pub request_timeout: Option<Duration>,
    /// Log sinks.
    pub logging: LoggingConfig,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for malformed values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = match non_empty(lookup(PRACTICUM_ENDPOINT)) {
            Some(raw) => parse_endpoint(&raw)?,
            None => parse_endpoint(DEFAULT_ENDPOINT)?,
        };

        let retry_period = match non_empty(lookup(RETRY_PERIOD)) {
            Some(raw) => parse_secs(RETRY_PERIOD, &raw)?,
            None => DEFAULT_RETRY_PERIOD,
        };

        let request_timeout = non_empty(lookup(REQUEST_TIMEOUT))
            .map(|raw| parse_secs(REQUEST_TIMEOUT, &raw))
            .transpose()?;

        Ok(Self {
            endpoint,
            retry_period,
            request_timeout,
            logging: LoggingConfig::default(),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidValue {
        field: PRACTICUM_ENDPOINT,
        reason: e.to_string(),
    })
}

/// Parse a positive number of seconds.
fn parse_secs(field: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than zero".into(),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::InvalidValue {
            field,
            reason: format!("expected seconds, got `{}`: {e}", raw.trim()),
        }),
    }
}
