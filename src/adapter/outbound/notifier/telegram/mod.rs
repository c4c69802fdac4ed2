//! Telegram message delivery.

pub mod sender;

pub use sender::{TelegramConfig, TelegramSender};
