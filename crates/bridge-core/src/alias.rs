//! Conversion between canonical phone numbers and synthetic email aliases.

use crate::error::{BridgeError, BridgeResult};
use crate::phone::PhoneNumberCodec;
use crate::types::PhoneNumber;

/// Maps phone numbers onto the bridge's synthetic email addresses.
///
/// `+14155551212` becomes `14155551212@<inbound domain>` and back.
#[derive(Debug, Clone)]
pub struct EmailAliasCodec {
    domain: String,
    phone: PhoneNumberCodec,
}

impl EmailAliasCodec {
    pub fn new(inbound_domain: impl Into<String>, phone: PhoneNumberCodec) -> Self {
        Self {
            domain: inbound_domain.into(),
            phone,
        }
    }

    /// Synthetic address for a canonical number: the digits without the
    /// leading `+`, at the inbound domain.
    pub fn phone_to_email(&self, number: &PhoneNumber) -> String {
        format!("{}@{}", number.wire_format(), self.domain)
    }

    /// Recover the phone number from a synthetic address.
    ///
    /// The local part must parse as a phone number once a `+` is
    /// prepended; a malformed address (zero or multiple `@`) fails the
    /// same way.
    pub fn email_to_phone(&self, email: &str) -> BridgeResult<PhoneNumber> {
        let invalid = || BridgeError::InvalidPhoneNumberInEmail(email.to_string());

        let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(invalid());
        }

        self.phone
            .normalize(&format!("+{local}"))
            .map_err(|_| invalid())
    }
}
