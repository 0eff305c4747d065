//! In-memory contact source

use super::{retain_fields, Access, ContactSource};
use crate::error::Result;
use crate::models::{Contact, ContactField};

/// A fixed list of contacts with a configurable permission answer
#[derive(Debug, Clone)]
pub struct MemoryContactSource {
    contacts: Vec<Contact>,
    access: Access,
}

impl MemoryContactSource {
    /// Source that grants access to `contacts`
    pub const fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            access: Access::Granted,
        }
    }

    /// Source that refuses access
    pub const fn denied() -> Self {
        Self {
            contacts: Vec::new(),
            access: Access::Denied,
        }
    }
}

impl ContactSource for MemoryContactSource {
    async fn request_access(&self) -> Result<Access> {
        Ok(self.access)
    }

    async fn list_contacts(&self, fields: &[ContactField]) -> Result<Vec<Contact>> {
        if !self.access.is_granted() {
            return Err(crate::Error::PermissionDenied);
        }
        Ok(self
            .contacts
            .iter()
            .cloned()
            .map(|contact| retain_fields(contact, fields))
            .collect())
    }
}
