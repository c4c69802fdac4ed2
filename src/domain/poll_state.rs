//! Loop-local polling state.
//!
//! Holds the `from_date` watermark and the last message sent to the chat.
//! Lives for the duration of the process only.

/// Initial lookback window: the first query asks for the last 24 hours.
pub const LOOKBACK_SECS: i64 = 60 * 60 * 24;

/// Mutable state carried between polling cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    timestamp: i64,
    last_message: Option<String>,
}

impl PollState {
    /// Start polling from one day before `now` (unix seconds).
    #[must_use]
    pub const fn starting_at(now: i64) -> Self {
        Self {
            timestamp: now - LOOKBACK_SECS,
            last_message: None,
        }
    }

    /// Watermark passed as `from_date` on the next query.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// True when `message` differs from the one sent last.
    #[must_use]
    pub fn is_new(&self, message: &str) -> bool {
        self.last_message.as_deref() != Some(message)
    }

    pub fn remember(&mut self, message: String) {
        self.last_message = Some(message);
    }

    /// Move the watermark when the API supplied `current_date`.
    pub fn advance(&mut self, current_date: Option<i64>) {
        if let Some(ts) = current_date {
            self.timestamp = ts;
        }
    }
}
