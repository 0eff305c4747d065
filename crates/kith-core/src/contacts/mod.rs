//! Contact sources: where the candidate pool comes from.

mod json_file;
mod memory;

pub use json_file::JsonFileContactSource;
pub use memory::MemoryContactSource;

use crate::error::Result;
use crate::models::{Contact, ContactField};

/// Outcome of asking the host for contact access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Contacts may be listed
    Granted,
    /// The user (or the platform) refused access
    Denied,
}

impl Access {
    /// Whether access was granted
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Trait for reading the host address book (async)
#[allow(async_fn_in_trait)]
pub trait ContactSource {
    /// Ask for permission to read contacts
    async fn request_access(&self) -> Result<Access>;

    /// List every contact, populating only the requested optional fields
    async fn list_contacts(&self, fields: &[ContactField]) -> Result<Vec<Contact>>;
}

/// Clear the optional fields that were not requested.
pub(crate) fn retain_fields(mut contact: Contact, fields: &[ContactField]) -> Contact {
    if !fields.contains(&ContactField::PhoneNumbers) {
        contact.phone_numbers.clear();
    }
    if !fields.contains(&ContactField::Emails) {
        contact.email = None;
    }
    if !fields.contains(&ContactField::Image) {
        contact.image = None;
    }
    contact
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retain_fields_strips_unrequested() {
        let mut contact = Contact::new("1", "Ada")
            .with_phone("555")
            .with_email("ada@example.com");
        contact.image = Some("file:///ada.png".to_string());

        let trimmed = retain_fields(contact, &[ContactField::PhoneNumbers]);
        assert_eq!(trimmed.primary_phone(), Some("555"));
        assert_eq!(trimmed.email, None);
        assert_eq!(trimmed.image, None);
    }
}
