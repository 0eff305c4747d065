//! Exclusion list model

use serde::{Deserialize, Serialize};

use super::{Contact, ContactId};

/// Ordered, append-only list of excluded contact identifiers.
///
/// Membership is what matters for filtering; a repeated id is harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet(Vec<ContactId>);

impl ExclusionSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an identifier
    pub fn push(&mut self, id: ContactId) {
        self.0.push(id);
    }

    /// Membership test
    pub fn contains(&self, id: &ContactId) -> bool {
        self.0.iter().any(|excluded| excluded == id)
    }

    /// Drop every contact whose id is excluded, preserving order
    pub fn filter(&self, contacts: Vec<Contact>) -> Vec<Contact> {
        contacts
            .into_iter()
            .filter(|contact| !self.contains(&contact.id))
            .collect()
    }

    /// Stored entries, in insertion order
    pub fn ids(&self) -> &[ContactId] {
        &self.0
    }

    /// Number of stored entries (duplicates included)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been excluded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ContactId> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = ContactId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
