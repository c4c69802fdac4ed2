//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points the polling loop talks through.
//! Adapters implement them to reach the outside world.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌──────────────┐                                    ┌───────────────┐
//! │ Review API   │                                    │ Message       │
//! │ Adapter      │                                    │ Adapter       │
//! └──────────────┘                                    └───────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`ReviewSource`] - Homework status queries
//! - [`MessageSender`] - Outbound chat messages (Telegram)

pub mod outbound;

pub use outbound::notifier::MessageSender;
pub use outbound::review::ReviewSource;
