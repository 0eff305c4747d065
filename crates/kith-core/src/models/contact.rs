//! Contact model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable identifier assigned by the contact source
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A phone number attached to a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// Dialable number as stored by the address book
    pub number: String,
    /// Optional label ("mobile", "home", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PhoneNumber {
    /// Create an unlabelled phone number
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            label: None,
        }
    }
}

/// A contact record owned by the host contact source.
///
/// Kith never mutates contacts; it only stores a copy inside the daily pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Stable identifier
    pub id: ContactId,
    /// Display name
    pub name: String,
    /// Zero or more phone numbers
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,
    /// Primary email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Image reference (URI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Contact {
    /// Create a contact with only an id and a name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ContactId::new(id),
            name: name.into(),
            phone_numbers: Vec::new(),
            email: None,
            image: None,
        }
    }

    /// Add a phone number
    #[must_use]
    pub fn with_phone(mut self, number: impl Into<String>) -> Self {
        self.phone_numbers.push(PhoneNumber::new(number));
        self
    }

    /// Set the email address
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// First phone number, used for call and sms
    pub fn primary_phone(&self) -> Option<&str> {
        self.phone_numbers
            .first()
            .map(|phone| phone.number.trim())
            .filter(|number| !number.is_empty())
    }
}

/// Optional contact fields a source may be asked to populate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// Phone numbers
    PhoneNumbers,
    /// Email addresses
    Emails,
    /// Image reference
    Image,
}
