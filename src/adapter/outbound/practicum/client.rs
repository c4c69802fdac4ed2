//! Review API REST client.
//!
//! Issues one authenticated GET per call and classifies failures into
//! transport, HTTP status and decoding errors. No retries happen here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{PollError, Result};
use crate::port::ReviewSource;

/// Homework status endpoint of the review API.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// HTTP client for the homework status endpoint.
pub struct PracticumClient {
    http: HttpClient,
    endpoint: Url,
    token: String,
}

impl PracticumClient {
    /// Create a client for `endpoint` authenticating with `token`.
    ///
    /// Without a `timeout` the request waits as long as the HTTP client's
    /// defaults allow.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: Url, token: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
            token: token.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }
}

#[async_trait]
impl ReviewSource for PracticumClient {
    async fn fetch_updates(&self, from_date: i64) -> std::result::Result<Value, PollError> {
        let from_date = if from_date == 0 {
            chrono::Utc::now().timestamp()
        } else {
            from_date
        };

        debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .http
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, self.authorization())
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(PollError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(PollError::Request)?;
        serde_json::from_str(&body).map_err(PollError::Decode)
    }
}
