//! Error types for the bridge server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bridge_core::BridgeError;
use serde::Serialize;
use thiserror::Error;

/// Server error types.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Resolution(#[from] BridgeError),

    #[error("Error sending message to SendGrid: {0}")]
    EmailDelivery(String),

    #[error("Error sending message to Vonage: {0}")]
    SmsDelivery(String),

    #[error("Invalid envelope in inbound email: {0}")]
    InvalidEnvelope(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::Resolution(BridgeError::DirectoryInconsistent) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DIRECTORY_INCONSISTENT")
            }
            ServerError::Resolution(BridgeError::InvalidPhoneNumber(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_PHONE_NUMBER")
            }
            ServerError::Resolution(BridgeError::InvalidPhoneNumberInEmail(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_PHONE_NUMBER_IN_EMAIL")
            }
            ServerError::Resolution(BridgeError::NoEmailForNumber(_)) => {
                (StatusCode::BAD_REQUEST, "NO_EMAIL_FOR_NUMBER")
            }
            ServerError::Resolution(BridgeError::NoNumberForEmail(_)) => {
                (StatusCode::BAD_REQUEST, "NO_NUMBER_FOR_EMAIL")
            }
            ServerError::EmailDelivery(_) => (StatusCode::BAD_REQUEST, "EMAIL_DELIVERY_FAILED"),
            ServerError::SmsDelivery(_) => (StatusCode::BAD_REQUEST, "SMS_DELIVERY_FAILED"),
            ServerError::InvalidEnvelope(_) => (StatusCode::BAD_REQUEST, "INVALID_ENVELOPE"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
