//! Vonage SMS API types.

use serde::Deserialize;

/// Response to a send request.
///
/// The API reports per-message delivery verdicts in the body; the HTTP
/// status is 200 even for rejected messages.
#[derive(Debug, Clone, Deserialize)]
pub struct SmsResponse {
    #[serde(rename = "message-count", default)]
    pub message_count: Option<String>,
    pub messages: Vec<SmsMessageStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmsMessageStatus {
    /// `"0"` means accepted; anything else is a provider error code.
    pub status: String,

    #[serde(rename = "message-id", default)]
    pub message_id: Option<String>,

    #[serde(rename = "error-text", default)]
    pub error_text: Option<String>,
}
