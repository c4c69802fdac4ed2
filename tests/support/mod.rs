#![allow(dead_code)]

use std::time::Duration;

use homework_bot::application::{Notifier, Poller};
use serde_json::{json, Value};

use crate::harness::{RecordingSender, ScriptedSource};

/// Fixed clock for pollers built in tests.
pub const NOW: i64 = 1_700_000_000;

pub fn homework(name: &str, status: &str) -> Value {
    json!({"homework_name": name, "status": status})
}

pub fn poller(
    source: &ScriptedSource,
    sender: &RecordingSender,
) -> Poller<ScriptedSource, RecordingSender> {
    poller_with_period(source, sender, Duration::ZERO)
}

pub fn poller_with_period(
    source: &ScriptedSource,
    sender: &RecordingSender,
    retry_period: Duration,
) -> Poller<ScriptedSource, RecordingSender> {
    Poller::new(
        source.clone(),
        Notifier::new(sender.clone()),
        retry_period,
        NOW,
    )
}
