//! HTTP request handlers.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use tracing::info;

use super::types::{EmailWebhookForm, Envelope, SmsWebhookForm};
use super::AppState;
use crate::error::ServerError;
use bridge_core::{InboundEmail, InboundSms};

/// Body acknowledging an SMS webhook without further instructions.
const TWIML_OK: &str = "<Response></Response>";

/// Status endpoint.
///
/// Reports missing settings and a broken address book as a 500 so that
/// uptime monitors notice misconfiguration, not just downtime.
pub async fn status(State(state): State<AppState>) -> (StatusCode, String) {
    if !state.missing_settings.is_empty() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!(
                "The following settings are missing: {}",
                state.missing_settings.join(", ")
            ),
        );
    }

    if !state.router.directory().is_consistent() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            bridge_core::BridgeError::DirectoryInconsistent.to_string(),
        );
    }

    (
        StatusCode::OK,
        "All configured! POST SMS webhooks to /handle-sms and inbound email to /handle-email."
            .to_string(),
    )
}

/// Bridge an inbound SMS to email.
pub async fn handle_sms(
    State(state): State<AppState>,
    Form(form): Form<SmsWebhookForm>,
) -> Result<&'static str, ServerError> {
    let sms = InboundSms {
        from: form.from,
        to: form.to,
        body: form.body,
    };

    let email = state.router.resolve_sms_to_email(&sms)?;

    state
        .email
        .send_email(&email)
        .await
        .map_err(ServerError::EmailDelivery)?;

    info!(to = %email.to, "Bridged SMS to email");
    Ok(TWIML_OK)
}

/// Bridge an inbound email to SMS.
///
/// Responds with the provider's message id on success.
pub async fn handle_email(
    State(state): State<AppState>,
    Form(form): Form<EmailWebhookForm>,
) -> Result<String, ServerError> {
    let envelope: Envelope = serde_json::from_str(&form.envelope)
        .map_err(|e| ServerError::InvalidEnvelope(e.to_string()))?;

    let email = InboundEmail {
        envelope_from: envelope.from,
        envelope_to: envelope.to,
        header_to: form.to,
        body: form.text,
    };

    let sms = state.router.resolve_email_to_sms(&email)?;

    let message_id = state
        .sms
        .send_sms(&sms)
        .await
        .map_err(ServerError::SmsDelivery)?;

    info!(to = %sms.to, %message_id, "Bridged email to SMS");
    Ok(message_id)
}
