use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use homework_bot::error::NotifyError;
use homework_bot::port::MessageSender;

/// Thread-safe message collector for notification assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingSender {
    attempts: Arc<Mutex<Vec<String>>>,
    fail: Arc<AtomicBool>,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every delivery fails.
    pub fn failing() -> Self {
        let sender = Self::default();
        sender.fail.store(true, Ordering::SeqCst);
        sender
    }

    /// Every message handed to the transport, delivered or not.
    pub fn messages(&self) -> Vec<String> {
        self.attempts.lock().expect("lock sender messages").clone()
    }

    pub fn len(&self) -> usize {
        self.attempts.lock().expect("lock sender messages").len()
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send_message(&self, text: &str) -> Result<(), NotifyError> {
        self.attempts
            .lock()
            .expect("lock sender messages")
            .push(text.to_owned());
        if self.fail.load(Ordering::SeqCst) {
            return Err(NotifyError::Transport("Forbidden: bot was blocked".into()));
        }
        Ok(())
    }
}
