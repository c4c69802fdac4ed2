//! Composition root: wire settings and credentials into a [`Poller`].

use tracing::info;

use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramSender};
use crate::adapter::outbound::practicum::PracticumClient;
use crate::application::{Notifier, Poller};
use crate::error::Result;
use crate::infrastructure::config::{Credentials, Settings};

/// The production poller: review API in, Telegram out.
pub type BotPoller = Poller<PracticumClient, TelegramSender>;

/// Build the production poller.
///
/// # Errors
///
/// Returns an error if the chat identifier is invalid or the HTTP client
/// cannot be built.
pub fn build_poller(settings: &Settings, credentials: &Credentials) -> Result<BotPoller> {
    let telegram = TelegramConfig::new(
        credentials.telegram_token.clone(),
        &credentials.telegram_chat_id,
    )?;
    let client = PracticumClient::new(
        settings.endpoint.clone(),
        credentials.practicum_token.clone(),
        settings.request_timeout,
    )?;

    info!(
        endpoint = %settings.endpoint,
        chat = ?telegram.recipient,
        request_timeout_secs = settings.request_timeout.map(|t| t.as_secs()),
        "Components initialized"
    );

    Ok(Poller::new(
        client,
        Notifier::new(TelegramSender::new(telegram)),
        settings.retry_period,
        chrono::Utc::now().timestamp(),
    ))
}
