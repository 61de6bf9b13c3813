//! Delivery seams between routing and the provider clients.

use async_trait::async_trait;
use bridge_core::{OutboundEmail, OutboundSms};
use sendgrid_client::SendGridClient;
use vonage_client::VonageClient;

/// Outbound email delivery.
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    /// Deliver one email, returning the provider's error text on failure.
    async fn send_email(&self, email: &OutboundEmail) -> Result<(), String>;
}

/// Outbound SMS delivery.
#[async_trait]
pub trait SmsDelivery: Send + Sync {
    /// Deliver one SMS, returning the provider's message id on success.
    async fn send_sms(&self, sms: &OutboundSms) -> Result<String, String>;
}

#[async_trait]
impl EmailDelivery for SendGridClient {
    async fn send_email(&self, email: &OutboundEmail) -> Result<(), String> {
        self.send(&email.from, &email.to, &email.subject, &email.body)
            .await
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl SmsDelivery for VonageClient {
    async fn send_sms(&self, sms: &OutboundSms) -> Result<String, String> {
        self.send(&sms.from, &sms.to, &sms.text)
            .await
            .map_err(|e| e.to_string())
    }
}
