//! Contact source backed by an exported JSON address book.
//!
//! The file holds a JSON array of contact records in the host's camelCase
//! shape (`id`, `name`, `phoneNumbers`, `email`, `image`). A missing or
//! unreadable file is reported as denied access rather than an error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{retain_fields, Access, ContactSource};
use crate::error::{Error, Result};
use crate::models::{Contact, ContactField};

/// Reads contacts from a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileContactSource {
    path: PathBuf,
}

impl JsonFileContactSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Contact>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if is_access_error(error.kind()) => return Err(Error::PermissionDenied),
            Err(error) => return Err(error.into()),
        };
        let contacts: Vec<Contact> = serde_json::from_str(&raw)?;

        let total = contacts.len();
        let usable = contacts
            .into_iter()
            .filter(|contact| !contact.id.as_str().trim().is_empty())
            .collect::<Vec<_>>();
        if usable.len() < total {
            tracing::warn!(
                "Skipped {} contact(s) without an id in {}",
                total - usable.len(),
                self.path.display()
            );
        }
        Ok(usable)
    }
}

const fn is_access_error(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::NotFound | ErrorKind::PermissionDenied)
}

impl ContactSource for JsonFileContactSource {
    async fn request_access(&self) -> Result<Access> {
        match std::fs::File::open(&self.path) {
            Ok(_) => Ok(Access::Granted),
            Err(error) if is_access_error(error.kind()) => {
                tracing::debug!(
                    "Contacts file {} is not accessible: {}",
                    self.path.display(),
                    error
                );
                Ok(Access::Denied)
            }
            Err(error) => Err(error.into()),
        }
    }

    async fn list_contacts(&self, fields: &[ContactField]) -> Result<Vec<Contact>> {
        Ok(self
            .read_all()?
            .into_iter()
            .map(|contact| retain_fields(contact, fields))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BOOK: &str = r#"[
        { "id": "1", "name": "Ada", "phoneNumbers": [{ "number": "555-0100" }] },
        { "id": "2", "name": "Grace", "email": "grace@example.com" },
        { "id": "", "name": "Nobody" }
    ]"#;

    #[tokio::test]
    async fn test_missing_file_is_denied() {
        let tmp = tempdir().unwrap();
        let source = JsonFileContactSource::new(tmp.path().join("contacts.json"));
        assert_eq!(source.request_access().await.unwrap(), Access::Denied);
        assert!(matches!(
            source.list_contacts(&[]).await,
            Err(Error::PermissionDenied)
        ));
    }

    #[tokio::test]
    async fn test_lists_contacts_with_requested_fields() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("contacts.json");
        std::fs::write(&path, BOOK).unwrap();

        let source = JsonFileContactSource::new(&path);
        assert_eq!(source.request_access().await.unwrap(), Access::Granted);

        let contacts = source
            .list_contacts(&[ContactField::Emails])
            .await
            .unwrap();
        assert_eq!(contacts.len(), 2);
        assert!(contacts[0].phone_numbers.is_empty());
        assert_eq!(contacts[1].email.as_deref(), Some("grace@example.com"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_serialization_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("contacts.json");
        std::fs::write(&path, "{}").unwrap();

        let source = JsonFileContactSource::new(&path);
        assert!(matches!(
            source.list_contacts(&[]).await,
            Err(Error::Serialization(_))
        ));
    }
}
