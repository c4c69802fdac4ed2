//! Message transport port.

use async_trait::async_trait;

use crate::error::NotifyError;

/// Capability to send a text message to the configured chat.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Failures are reported, never retried; the caller decides what to do
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, text: &str) -> Result<(), NotifyError>;
}
