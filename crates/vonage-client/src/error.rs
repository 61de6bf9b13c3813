//! Vonage client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VonageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Send failed: {0}")]
    SendFailed(String),
}
