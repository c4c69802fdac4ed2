//! The polling loop.
//!
//! Each cycle fetches updates since the watermark, interprets the latest
//! homework record and tells the chat when its message changed. Any cycle
//! error becomes a single failure notice, deduplicated against the previous
//! message. The retry sleep runs after every cycle, even one that panicked.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures_util::FutureExt;
use tracing::{error, info};

use super::notifier::Notifier;
use super::response::{current_date, extract_homeworks};
use super::status::parse_status;
use crate::domain::PollState;
use crate::error::{error_chain, PollError};
use crate::port::{MessageSender, ReviewSource};

/// Sent once when the loop starts.
pub const STARTUP_MESSAGE: &str = "Бот начал работу";

/// Prefix of the chat notice sent when a cycle fails.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// What a single polling cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The latest homework message changed and was sent.
    Notified,
    /// The latest homework message matched the previous one.
    Unchanged,
    /// The response held no homework records.
    NoHomeworks,
    /// The cycle failed; a failure notice was sent unless it repeated.
    Failed,
}

/// Drives the fetch / interpret / notify cycle.
pub struct Poller<R, S> {
    source: R,
    notifier: Notifier<S>,
    state: PollState,
    retry_period: Duration,
}

impl<R: ReviewSource, S: MessageSender> Poller<R, S> {
    /// Create a poller whose watermark starts one day before `now`.
    pub fn new(source: R, notifier: Notifier<S>, retry_period: Duration, now: i64) -> Self {
        Self {
            source,
            notifier,
            state: PollState::starting_at(now),
            retry_period,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Announce startup to the chat.
    pub async fn start(&self) {
        info!(
            from_date = self.state.timestamp(),
            retry_period_secs = self.retry_period.as_secs(),
            "Homework bot started"
        );
        self.notifier.notify(STARTUP_MESSAGE).await;
    }

    /// Run forever: announce startup, then cycle and sleep.
    pub async fn run(&mut self) {
        self.start().await;
        loop {
            self.tick().await;
        }
    }

    /// One guarded cycle followed by the retry sleep.
    ///
    /// Returns `None` when the cycle panicked.
    pub async fn tick(&mut self) -> Option<CycleOutcome> {
        let outcome = match AssertUnwindSafe(self.run_cycle()).catch_unwind().await {
            Ok(outcome) => Some(outcome),
            Err(panic) => {
                error!(panic = %panic_message(panic.as_ref()), "Polling cycle panicked");
                None
            }
        };
        tokio::time::sleep(self.retry_period).await;
        outcome
    }

    /// Poll once and turn any failure into a chat notice.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll().await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.report_failure(&e).await;
                CycleOutcome::Failed
            }
        }
    }

    async fn poll(&mut self) -> Result<CycleOutcome, PollError> {
        let response = self.source.fetch_updates(self.state.timestamp()).await?;
        let homeworks = extract_homeworks(&response)?;

        // Only the most recent record is reported per cycle.
        let outcome = match homeworks.first() {
            Some(latest) => {
                let message = parse_status(latest)?;
                self.notify_if_new(message).await
            }
            None => {
                info!("No homeworks found");
                CycleOutcome::NoHomeworks
            }
        };

        self.state.advance(current_date(&response));
        Ok(outcome)
    }

    async fn notify_if_new(&mut self, message: String) -> CycleOutcome {
        if self.state.is_new(&message) {
            self.notifier.notify(&message).await;
            self.state.remember(message);
            CycleOutcome::Notified
        } else {
            info!("Homework status unchanged");
            CycleOutcome::Unchanged
        }
    }

    async fn report_failure(&mut self, err: &PollError) {
        error!(error = %error_chain(err), details = ?err, "Polling cycle failed");

        let message = format!("{FAILURE_PREFIX}: {err}");
        if self.state.is_new(&message) {
            self.notifier.notify(&message).await;
            self.state.remember(message);
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
