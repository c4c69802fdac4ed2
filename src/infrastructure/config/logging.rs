//! Logging configuration and initialization.

use std::path::PathBuf;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{Error, Result};
use crate::infrastructure::logging::{LineFormat, RotatingFile};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Append-only log file, rotated by size.
    pub file: PathBuf,
    /// Size at which the log file is rotated.
    pub max_bytes: u64,
    /// Rotated files kept next to the active one.
    pub backups: usize,
}

impl LoggingConfig {
    /// Install the console and rotating-file sinks as the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or a global
    /// subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));
        let file = RotatingFile::open(&self.file, self.max_bytes, self.backups)?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .event_format(LineFormat)
                    .with_writer(std::io::stderr),
            )
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .event_format(LineFormat)
                    .with_writer(file),
            )
            .try_init()
            .map_err(|e| Error::Logging(e.to_string()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".into(),
            file: PathBuf::from("homework_bot.log"),
            max_bytes: 50_000_000,
            backups: 5,
        }
    }
}
