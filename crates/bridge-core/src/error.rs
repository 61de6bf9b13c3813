//! Typed errors for identity resolution.

use thiserror::Error;

/// Errors produced while resolving identities between channels.
///
/// Every variant carries the offending input so the HTTP layer can turn it
/// into a diagnostic without re-deriving context. Resolution never panics;
/// these are ordinary return values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    #[error("Invalid phone number in email address: {0}")]
    InvalidPhoneNumberInEmail(String),

    #[error("No email address is configured to receive SMS messages sent to '{0}' - try updating the address book?")]
    NoEmailForNumber(String),

    #[error("The email address '{0}' is not configured to send SMS via this application - try updating the address book?")]
    NoNumberForEmail(String),

    #[error("Only one email address can be configured per phone number - please update the address book so that each phone number matches exactly one email address")]
    DirectoryInconsistent,
}

/// Result type alias for resolution operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
