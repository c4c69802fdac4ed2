//! Handler for the bot's main run.

use std::time::Duration;

use tracing::{error, info};

use super::command::Cli;
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap::build_poller;
use crate::infrastructure::config::{Credentials, Settings};

/// Apply CLI overrides on top of environment settings.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for a zero duration.
pub fn apply_overrides(
    mut settings: Settings,
    cli: &Cli,
) -> std::result::Result<Settings, ConfigError> {
    if let Some(secs) = cli.retry_period {
        settings.retry_period = positive_secs("--retry-period", secs)?;
    }
    if let Some(secs) = cli.request_timeout {
        settings.request_timeout = Some(positive_secs("--request-timeout", secs)?);
    }
    if let Some(path) = &cli.log_file {
        settings.logging.file = path.clone();
    }
    if let Some(level) = &cli.log_level {
        settings.logging.level = level.clone();
    }
    Ok(settings)
}

fn positive_secs(field: &'static str, secs: u64) -> std::result::Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than zero".into(),
        });
    }
    Ok(Duration::from_secs(secs))
}

/// Execute the bot.
///
/// Runs forever unless `--once` is given. Missing credentials and wiring
/// failures are logged and returned as an error so the process exits
/// non-zero.
pub async fn execute(cli: Cli) -> Result<()> {
    let settings = apply_overrides(Settings::from_env()?, &cli)?;
    settings.logging.init()?;

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!(fatal = true, error = %e, "Missing required credentials, shutting down");
            return Err(e.into());
        }
    };

    let mut poller = match build_poller(&settings, &credentials) {
        Ok(poller) => poller,
        Err(e) => {
            error!(fatal = true, error = %e, "Failed to initialize bot, shutting down");
            return Err(e);
        }
    };

    if cli.once {
        poller.start().await;
        let outcome = poller.run_cycle().await;
        info!(?outcome, "Single cycle finished");
        return Ok(());
    }

    poller.run().await;
    Ok(())
}
