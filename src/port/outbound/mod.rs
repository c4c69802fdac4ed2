//! Outbound ports: what the loop needs from external systems.

pub mod notifier;
pub mod review;
