//! Application configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all) is a
//! valid configuration. Unknown fields are rejected to catch typos early.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::notify::Notification;
use crate::util::normalize_text_option;

const DEFAULT_REMINDER_HOUR: u32 = 8;
const DEFAULT_REMINDER_TITLE: &str = "Just a friendly reminder to write a friend!";
const DEFAULT_REMINDER_BODY: &str = "Click to see who you will write today.";
const MAX_STORAGE_RETRIES: u32 = 5;

/// Where the two Kith records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Local libSQL database file
    #[default]
    Database,
    /// OS keychain entries
    Keyring,
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KithConfig {
    /// Local hour (0-23) of the next-day reminder
    pub reminder_hour: u32,
    /// Reminder notification title
    pub reminder_title: String,
    /// Reminder notification body
    pub reminder_body: String,
    /// How many times a failed storage operation is retried before giving up
    pub storage_retries: u32,
    /// Exported address book to draw from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts_path: Option<PathBuf>,
    /// Storage backend for the pick and exclusion records
    pub backend: StoreBackend,
}

impl Default for KithConfig {
    fn default() -> Self {
        Self {
            reminder_hour: DEFAULT_REMINDER_HOUR,
            reminder_title: DEFAULT_REMINDER_TITLE.to_string(),
            reminder_body: DEFAULT_REMINDER_BODY.to_string(),
            storage_retries: 1,
            contacts_path: None,
            backend: StoreBackend::Database,
        }
    }
}

impl KithConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|error| Error::Config(format!("invalid config JSON: {error}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|error| {
            Error::Config(format!("failed to read config at {}: {error}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// Write the configuration as pretty JSON, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.reminder_hour > 23 {
            return Err(Error::Config(format!(
                "reminder_hour must be between 0 and 23 (got {})",
                self.reminder_hour
            )));
        }
        if normalize_text_option(Some(self.reminder_title.clone())).is_none() {
            return Err(Error::Config("reminder_title must not be empty".to_string()));
        }
        if self.storage_retries > MAX_STORAGE_RETRIES {
            return Err(Error::Config(format!(
                "storage_retries must be at most {MAX_STORAGE_RETRIES} (got {})",
                self.storage_retries
            )));
        }
        Ok(())
    }

    /// Reminder notification content
    pub fn notification(&self) -> Notification {
        Notification {
            title: self.reminder_title.trim().to_string(),
            body: self.reminder_body.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(KithConfig::from_json("{}").unwrap(), KithConfig::default());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let error = KithConfig::from_json(r#"{"reminder_hours": 9}"#).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn test_rejects_out_of_range_hour() {
        let error = KithConfig::from_json(r#"{"reminder_hour": 24}"#).unwrap_err();
        assert!(error.to_string().contains("reminder_hour"));
    }

    #[test]
    fn test_parses_backend() {
        let config = KithConfig::from_json(r#"{"backend": "keyring", "storage_retries": 3}"#)
            .unwrap();
        assert_eq!(config.backend, StoreBackend::Keyring);
        assert_eq!(config.storage_retries, 3);
    }

    #[test]
    fn test_missing_file_is_default_and_save_roundtrips() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.json");
        assert_eq!(
            KithConfig::load_from_path(&path).unwrap(),
            KithConfig::default()
        );

        let config = KithConfig {
            reminder_hour: 7,
            contacts_path: Some(PathBuf::from("/tmp/contacts.json")),
            ..KithConfig::default()
        };
        config.save_to_path(&path).unwrap();
        assert_eq!(KithConfig::load_from_path(&path).unwrap(), config);
    }
}
