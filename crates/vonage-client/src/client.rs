//! Vonage SMS HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::error::VonageError;
use crate::types::SmsResponse;

/// Vonage SMS send client.
#[derive(Clone)]
pub struct VonageClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_secret: String,
}

impl VonageClient {
    /// Create a new Vonage client.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, VonageError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        })
    }

    /// Send a single unicode SMS.
    ///
    /// `from` and `to` are in wire format (E.164 without the `+`). Returns
    /// the provider's message id on acceptance.
    #[instrument(skip(self, text))]
    pub async fn send(&self, from: &str, to: &str, text: &str) -> Result<String, VonageError> {
        let params = [
            ("api_key", self.api_key.as_str()),
            ("api_secret", self.api_secret.as_str()),
            ("from", from),
            ("to", to),
            ("text", text),
            ("type", "unicode"),
        ];

        let response = self
            .client
            .post(format!("{}/sms/json", self.base_url))
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(VonageError::Api(msg));
        }

        let body: SmsResponse = response.json().await?;
        let first = body
            .messages
            .first()
            .ok_or_else(|| VonageError::Api("response contained no messages".into()))?;

        if first.status != "0" {
            let reason = first
                .error_text
                .clone()
                .unwrap_or_else(|| format!("status {}", first.status));
            warn!("SMS send failed: {}", reason);
            return Err(VonageError::SendFailed(reason));
        }

        debug!("Sent SMS to {}", to);
        Ok(first.message_id.clone().unwrap_or_default())
    }
}
