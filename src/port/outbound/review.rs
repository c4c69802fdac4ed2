//! Review API port.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PollError;

/// Source of homework status updates.
///
/// One call issues one request; retries belong to the caller.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch every status change since `from_date` (unix seconds).
    ///
    /// A zero `from_date` is replaced by the current time. The decoded body
    /// is returned as-is; shape checks happen in the application layer.
    async fn fetch_updates(&self, from_date: i64) -> Result<Value, PollError>;
}
