//! SendGrid client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SendGridError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Send failed: {0}")]
    SendFailed(String),
}
