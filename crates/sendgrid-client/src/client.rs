//! SendGrid HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::error::SendGridError;
use crate::types::MailSendRequest;

/// SendGrid v3 mail-send client.
#[derive(Clone)]
pub struct SendGridClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SendGridClient {
    /// Create a new SendGrid client.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SendGridError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Send a plain-text email. The caller owns retries; this client
    /// reports the provider's verdict once.
    #[instrument(skip(self, body))]
    pub async fn send(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), SendGridError> {
        let request = MailSendRequest::plain_text(from, to, subject, body);

        let response = self
            .client
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            warn!("Mail send failed: {}", msg);
            return Err(SendGridError::SendFailed(msg));
        }

        debug!("Sent email to {}", to);
        Ok(())
    }
}
