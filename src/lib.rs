//! Homework bot - review status notifications over Telegram.
//!
//! Polls the homework review API on a fixed interval, detects status changes
//! of the latest submission and forwards them to a single Telegram chat.
//!
//! # Architecture
//!
//! - **`domain`** - Verdicts, validated homework records and loop state
//! - **`port`** - Traits for the review API and the message transport
//! - **`application`** - Response validation, status interpretation,
//!   best-effort notifier and the polling loop
//! - **`adapter`** - reqwest review API client, teloxide sender, clap CLI
//! - **`infrastructure`** - Credentials, settings, log sinks, wiring
//!
//! # Example
//!
//! ```no_run
//! use homework_bot::infrastructure::bootstrap::build_poller;
//! use homework_bot::infrastructure::config::{Credentials, Settings};
//!
//! # async fn run() -> homework_bot::error::Result<()> {
//! let settings = Settings::from_env()?;
//! let credentials = Credentials::from_env()?;
//! let mut poller = build_poller(&settings, &credentials)?;
//! poller.run().await;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
