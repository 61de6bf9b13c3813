//! Inbound events, resolved outbound messages, and the canonical phone type.

use std::fmt;

/// A phone number in E.164 form: `+` followed by the country code and
/// subscriber number, no separators.
///
/// Only [`crate::PhoneNumberCodec`] constructs these, so holding one is
/// proof the number already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub(crate) fn new(e164: String) -> Self {
        Self(e164)
    }

    /// The E.164 text, leading `+` included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The form the SMS providers expect on the wire: E.164 without the
    /// leading `+`.
    pub fn wire_format(&self) -> &str {
        self.0.trim_start_matches('+')
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PhoneNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An SMS received from the carrier webhook.
#[derive(Debug, Clone)]
pub struct InboundSms {
    /// Raw sender number as the carrier posted it.
    pub from: String,
    /// Raw destination number (one of the bridge's provisioned numbers).
    pub to: String,
    /// Message text.
    pub body: String,
}

/// An email received from the inbound-parse webhook.
#[derive(Debug, Clone)]
pub struct InboundEmail {
    /// SMTP envelope sender.
    pub envelope_from: String,
    /// SMTP envelope recipients; only the first is routed.
    pub envelope_to: Vec<String>,
    /// The `To:` header as displayed to the recipient.
    pub header_to: String,
    /// Message body; only the first line is forwarded.
    pub body: String,
}

/// A fully resolved email, ready to hand to the delivery provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// A fully resolved SMS, ready to hand to the delivery provider.
///
/// `from` and `to` are in wire format (no leading `+`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundSms {
    pub from: String,
    pub to: String,
    pub text: String,
}
