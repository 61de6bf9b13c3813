//! Resolution of inbound events into outbound delivery parameters.

use tracing::{debug, warn};

use crate::alias::EmailAliasCodec;
use crate::directory::AddressDirectory;
use crate::error::BridgeResult;
use crate::phone::PhoneNumberCodec;
use crate::types::{InboundEmail, InboundSms, OutboundEmail, OutboundSms};

/// Subject line applied to every bridged SMS.
const SMS_SUBJECT: &str = "Text message";

/// Resolves inbound events against the address book and the codecs.
///
/// Both entry points are pure functions: no I/O, no retries, no state
/// beyond the directory built at startup. Delivery happens elsewhere, and
/// only after resolution succeeds.
pub struct MessageRouter {
    directory: AddressDirectory,
    phone: PhoneNumberCodec,
    alias: EmailAliasCodec,
    forwarded_sender: Option<String>,
}

impl MessageRouter {
    /// `forwarded_sender` is substituted as the sender when an inbound
    /// email arrives through a forward or alias (envelope and header
    /// recipients disagree).
    pub fn new(
        directory: AddressDirectory,
        phone: PhoneNumberCodec,
        alias: EmailAliasCodec,
        forwarded_sender: Option<String>,
    ) -> Self {
        Self {
            directory,
            phone,
            alias,
            forwarded_sender,
        }
    }

    /// Turn a received SMS into the email that forwards it.
    ///
    /// The SMS sender becomes the synthetic `from` address; the SMS
    /// destination's configured correspondent becomes the `to` address.
    /// Any failure surfaces untouched and no email must be sent.
    pub fn resolve_sms_to_email(&self, sms: &InboundSms) -> BridgeResult<OutboundEmail> {
        let sender = self.phone.normalize(&sms.from)?;
        let from = self.alias.phone_to_email(&sender);
        let to = self
            .directory
            .email_for_phone(&sms.to, &self.phone)?
            .to_string();

        debug!(%from, %to, "Resolved inbound SMS");

        Ok(OutboundEmail {
            from,
            to,
            subject: SMS_SUBJECT.to_string(),
            body: sms.body.clone(),
        })
    }

    /// Turn a received email into the SMS that forwards its first line.
    ///
    /// Only the first envelope recipient is routed and only the first body
    /// line is forwarded; the rest is discarded.
    pub fn resolve_email_to_sms(&self, email: &InboundEmail) -> BridgeResult<OutboundSms> {
        let envelope_to = email
            .envelope_to
            .first()
            .map(String::as_str)
            .unwrap_or_default();

        // Envelope and header recipients disagreeing means the mail came
        // through a forward or alias; route it as the configured sender.
        let effective_from = if envelope_to != email.header_to {
            match &self.forwarded_sender {
                Some(fallback) => fallback.as_str(),
                None => {
                    warn!(
                        envelope_to,
                        header_to = %email.header_to,
                        "Recipient mismatch but no forwarded sender configured; using envelope sender"
                    );
                    email.envelope_from.as_str()
                }
            }
        } else {
            email.envelope_from.as_str()
        };

        let from = self.directory.phone_for_email(effective_from)?;
        let to = self.alias.email_to_phone(envelope_to)?;
        let text = email.body.lines().next().unwrap_or_default().to_string();

        debug!(%from, %to, "Resolved inbound email");

        Ok(OutboundSms {
            from: from.wire_format().to_string(),
            to: to.wire_format().to_string(),
            text,
        })
    }

    /// The directory this router resolves against.
    pub fn directory(&self) -> &AddressDirectory {
        &self.directory
    }
}
