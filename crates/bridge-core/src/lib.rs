//! Bidirectional identity resolution between SMS and email.
//!
//! Maps phone numbers to email addresses and back, canonicalizes phone
//! numbers to E.164, encodes the synthetic email-local-part convention,
//! and enforces that the address book is a true bijection. Resolution is
//! pure and synchronous; all I/O lives in the surrounding crates.

mod alias;
mod directory;
mod error;
mod phone;
mod router;
mod types;

pub use alias::EmailAliasCodec;
pub use directory::AddressDirectory;
pub use error::{BridgeError, BridgeResult};
pub use phone::PhoneNumberCodec;
pub use router::MessageRouter;
pub use types::*;
