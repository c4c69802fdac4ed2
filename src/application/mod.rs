//! Application services (use cases).
//!
//! These services validate API responses, interpret homework statuses and
//! run the polling loop on top of the outbound ports.

pub mod notifier;
pub mod poller;
pub mod response;
pub mod status;

pub use notifier::Notifier;
pub use poller::{CycleOutcome, Poller, FAILURE_PREFIX, STARTUP_MESSAGE};
pub use response::{current_date, extract_homeworks};
pub use status::{parse_homework, parse_status};
