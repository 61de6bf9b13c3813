//! Phone number parsing and E.164 canonicalization.

use crate::error::{BridgeError, BridgeResult};
use crate::types::PhoneNumber;

/// Regions this bridge can interpret bare national numbers against.
const CALLING_CODES: &[(&str, &str)] = &[
    ("US", "1"),
    ("CA", "1"),
    ("GB", "44"),
    ("DE", "49"),
    ("FR", "33"),
    ("AU", "61"),
    ("IN", "91"),
];

// E.164 allows at most 15 digits; under 7 cannot carry both a country
// code and a subscriber number.
const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;

/// Parses raw phone input and canonicalizes it to E.164.
///
/// Normalization is deterministic and idempotent: feeding a canonical
/// number back in yields the same number.
#[derive(Debug, Clone)]
pub struct PhoneNumberCodec {
    calling_code: &'static str,
}

impl PhoneNumberCodec {
    /// Create a codec that interprets numbers lacking a country code
    /// against `default_region` (e.g. `"US"`).
    pub fn new(default_region: &str) -> BridgeResult<Self> {
        let region = default_region.trim().to_ascii_uppercase();
        let calling_code = CALLING_CODES
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, code)| *code)
            .ok_or_else(|| {
                BridgeError::InvalidPhoneNumber(format!("unsupported region '{default_region}'"))
            })?;

        Ok(Self { calling_code })
    }

    /// Normalize `raw` to E.164.
    ///
    /// A leading `+` means the digits already carry a country code. Bare
    /// numbers are interpreted against the default region: a number that
    /// already starts with the region's calling code and is longer than a
    /// national number is taken as already international, anything else
    /// gets the calling code prefixed.
    pub fn normalize(&self, raw: &str) -> BridgeResult<PhoneNumber> {
        let invalid = || BridgeError::InvalidPhoneNumber(raw.to_string());

        let trimmed = raw.trim();
        let (has_plus, rest) = match trimmed.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut digits = String::with_capacity(rest.len());
        for c in rest.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if !matches!(c, ' ' | '-' | '(' | ')' | '.') {
                return Err(invalid());
            }
        }

        if digits.is_empty() || digits.starts_with('0') {
            // No country code starts with zero.
            return Err(invalid());
        }

        let canonical = if has_plus {
            digits
        } else if digits.starts_with(self.calling_code) && digits.len() > 10 {
            digits
        } else {
            format!("{}{}", self.calling_code, digits)
        };

        if canonical.len() < MIN_DIGITS || canonical.len() > MAX_DIGITS {
            return Err(invalid());
        }

        Ok(PhoneNumber::new(format!("+{canonical}")))
    }
}
