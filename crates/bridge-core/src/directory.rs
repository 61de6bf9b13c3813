//! The process-wide phone ↔ email address book.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{BridgeError, BridgeResult};
use crate::phone::PhoneNumberCodec;
use crate::types::PhoneNumber;

/// Immutable bijective mapping between phone numbers and email addresses.
///
/// Built once at startup from the configured address book and never
/// mutated afterwards; request handling only reads it, so concurrent
/// lookups need no locking.
#[derive(Debug)]
pub struct AddressDirectory {
    by_phone: HashMap<PhoneNumber, String>,
    by_email: HashMap<String, PhoneNumber>,
    consistent: bool,
}

impl AddressDirectory {
    /// Build the directory from raw `(phone, email)` pairs.
    ///
    /// Entries with a malformed phone number or email address are logged
    /// and skipped. A duplicate phone number keeps the last entry, as a
    /// config file would. The email→phone inverse is built over the
    /// surviving map; an email reached from more than one phone number
    /// marks the whole directory inconsistent.
    pub fn build<I>(entries: I, codec: &PhoneNumberCodec) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut by_phone = HashMap::new();
        for (raw_phone, email) in entries {
            let number = match codec.normalize(&raw_phone) {
                Ok(number) => number,
                Err(error) => {
                    warn!(entry = %raw_phone, %error, "Skipping address book entry with invalid phone number");
                    continue;
                }
            };

            if !is_plausible_email(&email) {
                warn!(entry = %email, "Skipping address book entry with invalid email address");
                continue;
            }

            by_phone.insert(number, email);
        }

        let mut by_email = HashMap::with_capacity(by_phone.len());
        let mut consistent = true;
        for (number, email) in &by_phone {
            if by_email.insert(email.clone(), number.clone()).is_some() {
                warn!(email = %email, "Address book maps the same email address to multiple phone numbers");
                consistent = false;
            }
        }

        Self {
            by_phone,
            by_email,
            consistent,
        }
    }

    /// Which phone number sends SMS on behalf of this email address?
    ///
    /// Fails for every lookup while the directory is inconsistent; the
    /// bijection must be restored (and the process restarted) first.
    pub fn phone_for_email(&self, email: &str) -> BridgeResult<PhoneNumber> {
        if !self.consistent {
            return Err(BridgeError::DirectoryInconsistent);
        }
        self.by_email
            .get(email)
            .cloned()
            .ok_or_else(|| BridgeError::NoNumberForEmail(email.to_string()))
    }

    /// Which email address receives SMS sent to this number?
    ///
    /// `raw` is normalized first, so webhook input can be passed straight
    /// through; a failed parse propagates as `InvalidPhoneNumber` and
    /// never reaches the map.
    pub fn email_for_phone(&self, raw: &str, codec: &PhoneNumberCodec) -> BridgeResult<&str> {
        let number = codec.normalize(raw)?;
        if !self.consistent {
            return Err(BridgeError::DirectoryInconsistent);
        }
        self.by_phone
            .get(&number)
            .map(String::as_str)
            .ok_or_else(|| BridgeError::NoEmailForNumber(number.as_str().to_string()))
    }

    /// False when two phone numbers share one email address.
    pub fn is_consistent(&self) -> bool {
        self.consistent
    }

    pub fn len(&self) -> usize {
        self.by_phone.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_phone.is_empty()
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> PhoneNumberCodec {
        PhoneNumberCodec::new("US").unwrap()
    }

    fn build(entries: &[(&str, &str)]) -> AddressDirectory {
        AddressDirectory::build(
            entries
                .iter()
                .map(|(p, e)| (p.to_string(), e.to_string())),
            &codec(),
        )
    }

    #[test]
    fn test_lookup_both_directions() {
        let dir = build(&[("+14155551212", "a@x.com")]);

        assert_eq!(dir.phone_for_email("a@x.com").unwrap(), "+14155551212");
        assert_eq!(dir.email_for_phone("+14155551212", &codec()).unwrap(), "a@x.com");
    }

    #[test]
    fn test_lookup_infers_default_region() {
        let dir = build(&[("+14155551212", "a@x.com")]);
        assert_eq!(dir.email_for_phone("4155551212", &codec()).unwrap(), "a@x.com");
    }

    #[test]
    fn test_entries_are_normalized_at_load() {
        let dir = build(&[("(415) 555-1212", "a@x.com")]);
        assert_eq!(dir.email_for_phone("+14155551212", &codec()).unwrap(), "a@x.com");
    }

    #[test]
    fn test_missing_email_lookup() {
        let dir = build(&[("+14155551212", "a@x.com")]);
        assert_eq!(
            dir.phone_for_email("b@x.com"),
            Err(BridgeError::NoNumberForEmail("b@x.com".into()))
        );
    }

    #[test]
    fn test_missing_phone_lookup_reports_normalized_number() {
        let dir = build(&[("+14155551212", "a@x.com")]);
        assert_eq!(
            dir.email_for_phone("4155551213", &codec()).unwrap_err(),
            BridgeError::NoEmailForNumber("+14155551213".into())
        );
    }

    #[test]
    fn test_invalid_phone_never_reaches_lookup() {
        let dir = build(&[("+14155551212", "a@x.com")]);
        assert!(matches!(
            dir.email_for_phone("not-a-number", &codec()),
            Err(BridgeError::InvalidPhoneNumber(_))
        ));
    }

    #[test]
    fn test_duplicate_phone_keeps_last_entry() {
        let dir = build(&[("+14155551212", "a@x.com"), ("+14155551212", "b@x.com")]);

        assert_eq!(dir.len(), 1);
        assert_eq!(dir.email_for_phone("+14155551212", &codec()).unwrap(), "b@x.com");
        assert!(dir.is_consistent());
    }

    #[test]
    fn test_duplicate_email_marks_inconsistent() {
        let dir = build(&[("+14155551212", "a@x.com"), ("+14155551213", "a@x.com")]);
        assert!(!dir.is_consistent());
    }

    #[test]
    fn test_inconsistent_directory_fails_all_lookups() {
        let dir = build(&[("+14155551212", "a@x.com"), ("+14155551213", "a@x.com")]);

        assert_eq!(
            dir.phone_for_email("a@x.com"),
            Err(BridgeError::DirectoryInconsistent)
        );
        assert_eq!(
            dir.email_for_phone("+14155551212", &codec()).unwrap_err(),
            BridgeError::DirectoryInconsistent
        );
        // Input validation still runs first.
        assert!(matches!(
            dir.email_for_phone("not-a-number", &codec()),
            Err(BridgeError::InvalidPhoneNumber(_))
        ));
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let dir = build(&[
            ("garbage", "a@x.com"),
            ("+14155551212", "not-an-email"),
            ("+14155551213", "b@x.com"),
        ]);

        assert_eq!(dir.len(), 1);
        assert!(dir.is_consistent());
        assert_eq!(dir.phone_for_email("b@x.com").unwrap(), "+14155551213");
    }

    #[test]
    fn test_empty_directory_is_consistent() {
        let dir = build(&[]);
        assert!(dir.is_empty());
        assert!(dir.is_consistent());
    }
}
