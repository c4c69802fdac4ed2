//! Telegram implementation of [`MessageSender`].
//!
//! Sends plain-text messages through the Bot API to a single chat.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;

use crate::error::{ConfigError, NotifyError};
use crate::port::MessageSender;

/// Configuration for the Telegram sender.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat for notifications.
    pub recipient: Recipient,
}

impl TelegramConfig {
    /// Build a config from a bot token and a raw chat identifier.
    ///
    /// The chat identifier is either a numeric chat id or an `@channel`
    /// username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the chat identifier is
    /// neither.
    pub fn new(bot_token: impl Into<String>, chat_id: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            bot_token: bot_token.into(),
            recipient: parse_recipient(chat_id)?,
        })
    }
}

fn parse_recipient(raw: &str) -> Result<Recipient, ConfigError> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return Ok(Recipient::Id(ChatId(id)));
    }
    if raw.len() > 1 && raw.starts_with('@') {
        return Ok(Recipient::ChannelUsername(raw.to_owned()));
    }
    Err(ConfigError::InvalidValue {
        field: "TELEGRAM_CHAT_ID",
        reason: format!("expected a numeric chat id or @channel, got `{raw}`"),
    })
}

/// Sends messages to the configured chat via the Telegram Bot API.
pub struct TelegramSender {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramSender {
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            bot: Bot::new(config.bot_token),
            recipient: config.recipient,
        }
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send_message(&self, text: &str) -> Result<(), NotifyError> {
        self.bot
            .send_message(self.recipient.clone(), text)
            .await
            .map(|_| ())
            .map_err(|e| NotifyError::Transport(e.to_string()))
    }
}
