use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", names.join(", "))]
    MissingCredentials { names: Vec<&'static str> },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors raised during a single polling cycle.
///
/// Every variant is recoverable: the loop logs it, reports it to the chat
/// and tries again after the retry period.
#[derive(Error, Debug)]
pub enum PollError {
    #[error("request to the review API failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("review API returned HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("failed to decode review API response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unexpected type for {context}: expected {expected}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
    },

    #[error("missing key `{key}` in review API response")]
    MissingKey { key: &'static str },

    #[error("unknown homework status `{status}`")]
    UnknownStatus { status: String },
}

/// Message delivery failure. Never escapes the notifier.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("failed to deliver message: {0}")]
    Transport(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Poll(#[from] PollError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Render an error together with its chain of sources.
#[must_use]
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": caused by: ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
