//! Best-effort chat notifications.
//!
//! Wraps a [`MessageSender`] so that delivery failures are logged and
//! dropped. A failed send never stops the polling loop.

use tracing::{debug, error, info};

use crate::error::error_chain;
use crate::port::MessageSender;

/// Sends messages to the chat, swallowing transport failures.
pub struct Notifier<S> {
    sender: S,
}

impl<S: MessageSender> Notifier<S> {
    pub fn new(sender: S) -> Self {
        Self { sender }
    }

    /// The wrapped transport.
    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Try once to deliver `message`.
    ///
    /// Returns whether delivery succeeded. Failures are logged at error
    /// level and not retried.
    pub async fn notify(&self, message: &str) -> bool {
        info!("Sending message to chat");
        match self.sender.send_message(message).await {
            Ok(()) => {
                debug!(text = message, "Message sent");
                true
            }
            Err(e) => {
                error!(error = %error_chain(&e), "Failed to send message");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotifyError;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct FlakySender {
        fail: bool,
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MessageSender for FlakySender {
        async fn send_message(&self, text: &str) -> Result<(), NotifyError> {
            if self.fail {
                return Err(NotifyError::Transport("chat not found".into()));
            }
            self.sent.lock().push(text.to_owned());
            Ok(())
        }
    }

    #[test]
    fn delivers_message() {
        let notifier = Notifier::new(FlakySender::default());
        assert!(tokio_test::block_on(notifier.notify("hello")));
        assert_eq!(*notifier.sender().sent.lock(), vec!["hello".to_owned()]);
    }

    #[test]
    fn transport_failure_is_swallowed() {
        let notifier = Notifier::new(FlakySender {
            fail: true,
            ..Default::default()
        });
        assert!(!tokio_test::block_on(notifier.notify("hello")));
        assert!(notifier.sender().sent.lock().is_empty());
    }
}
