//! Command-line interface definitions.
//!
//! Flags override the matching environment settings. Secrets are only ever
//! read from the environment.

use std::path::PathBuf;

use clap::Parser;

/// Poll the homework review API and report status changes to Telegram
#[derive(Parser, Debug, Default)]
#[command(name = "homework-bot")]
#[command(version)]
pub struct Cli {
    /// Seconds to sleep between polling cycles [env: RETRY_PERIOD, default: 600]
    #[arg(long, value_name = "SECS")]
    pub retry_period: Option<u64>,

    /// Per-request timeout in seconds [env: REQUEST_TIMEOUT]
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Log file path
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Send the startup notice, run a single cycle and exit
    #[arg(long)]
    pub once: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "homework-bot",
            "--retry-period",
            "30",
            "--log-file",
            "/tmp/bot.log",
            "--once",
        ]);
        assert_eq!(cli.retry_period, Some(30));
        assert_eq!(cli.request_timeout, None);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/bot.log")));
        assert!(cli.once);
    }

    #[test]
    fn no_flags_means_no_overrides() {
        let cli = Cli::parse_from(["homework-bot"]);
        assert!(cli.retry_period.is_none());
        assert!(cli.log_level.is_none());
        assert!(!cli.once);
    }
}
