//! Ways to reach the contact of the day.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::models::Contact;

/// Android content URI prefix for opening a contact card
const CONTACT_CARD_PREFIX: &str = "content://com.android.contacts/contacts/";

/// An outreach action offered for the shown contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactAction {
    /// Phone call to the first number
    Call,
    /// Text message to the first number
    Sms,
    /// Email to the contact's address
    Email,
    /// Open the contact card in the address book
    ViewContact,
}

impl ContactAction {
    /// Every action, in display order
    pub const ALL: [Self; 4] = [Self::Call, Self::Sms, Self::Email, Self::ViewContact];

    /// The URI handed to the OS, or `None` when the contact lacks the field
    pub fn uri(self, contact: &Contact) -> Option<String> {
        match self {
            Self::Call => contact.primary_phone().map(|number| format!("tel:{number}")),
            Self::Sms => contact.primary_phone().map(|number| format!("sms:{number}")),
            Self::Email => contact
                .email
                .as_deref()
                .map(str::trim)
                .filter(|email| !email.is_empty())
                .map(|email| format!("mailto:{email}")),
            Self::ViewContact => Some(format!("{CONTACT_CARD_PREFIX}{}", contact.id)),
        }
    }

    /// Actions that can be performed for `contact`
    pub fn available_for(contact: &Contact) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|action| action.uri(contact).is_some())
            .collect()
    }

    /// Short lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Sms => "sms",
            Self::Email => "email",
            Self::ViewContact => "contact",
        }
    }
}

impl fmt::Display for ContactAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "phone" | "tel" => Ok(Self::Call),
            "sms" | "text" => Ok(Self::Sms),
            "email" | "mail" => Ok(Self::Email),
            "contact" | "view" => Ok(Self::ViewContact),
            other => Err(Error::InvalidInput(format!("unknown action '{other}'"))),
        }
    }
}

/// Hands a URI to the operating system. Fire-and-forget: no result is observed
/// beyond whether the hand-off itself succeeded.
pub trait UrlOpener {
    fn open(&self, uri: &str) -> Result<()>;
}

/// Opener that records URIs instead of launching anything
#[derive(Debug, Default)]
pub struct MemoryOpener {
    opened: Mutex<Vec<String>>,
}

impl MemoryOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URIs opened so far
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

impl UrlOpener for MemoryOpener {
    fn open(&self, uri: &str) -> Result<()> {
        self.opened
            .lock()
            .map_err(|_| Error::Storage("opener lock poisoned".to_string()))?
            .push(uri.to_string());
        Ok(())
    }
}
