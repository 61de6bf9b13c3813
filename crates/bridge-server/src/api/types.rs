//! Webhook request types.

use serde::Deserialize;

/// Inbound SMS webhook form (Twilio format).
#[derive(Debug, Clone, Deserialize)]
pub struct SmsWebhookForm {
    /// Sender phone number
    #[serde(rename = "From")]
    pub from: String,

    /// Receiving bridge phone number
    #[serde(rename = "To")]
    pub to: String,

    /// Message text
    #[serde(rename = "Body", default)]
    pub body: String,
}

/// Inbound email webhook form (SendGrid Inbound Parse format).
#[derive(Debug, Clone, Deserialize)]
pub struct EmailWebhookForm {
    /// SMTP envelope as a JSON string
    pub envelope: String,

    /// `To` header as displayed to the recipient
    #[serde(default)]
    pub to: String,

    /// `From` header as displayed to the recipient
    #[serde(default)]
    pub from: String,

    /// Plain text body
    #[serde(default)]
    pub text: String,
}

/// Parsed SMTP envelope from the `envelope` form field.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Envelope recipients
    pub to: Vec<String>,

    /// Envelope sender
    pub from: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_parses_inbound_parse_payload() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"to":["14155551212@sms.example.com"],"from":"alice@example.com"}"#,
        )
        .unwrap();

        assert_eq!(envelope.to, vec!["14155551212@sms.example.com"]);
        assert_eq!(envelope.from, "alice@example.com");
    }

    #[test]
    fn test_envelope_rejects_missing_recipients() {
        assert!(serde_json::from_str::<Envelope>(r#"{"from":"alice@example.com"}"#).is_err());
    }
}
