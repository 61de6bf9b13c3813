//! SendGrid v3 mail-send API types.

use serde::Serialize;

/// Body of a `POST /v3/mail/send` request.
#[derive(Debug, Clone, Serialize)]
pub struct MailSendRequest {
    pub personalizations: Vec<Personalization>,
    pub from: EmailAddress,
    pub subject: String,
    pub content: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Personalization {
    pub to: Vec<EmailAddress>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailAddress {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

impl MailSendRequest {
    /// A plain-text message with a single recipient.
    pub fn plain_text(from: &str, to: &str, subject: &str, body: &str) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![EmailAddress { email: to.into() }],
            }],
            from: EmailAddress { email: from.into() },
            subject: subject.into(),
            content: vec![Content {
                content_type: "text/plain".into(),
                value: body.into(),
            }],
        }
    }
}
