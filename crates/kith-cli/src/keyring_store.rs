//! OS keychain key-value store.

use chrono::Utc;
use keyring::Entry;
use kith_core::storage::KeyValueStore;
use kith_core::Error;

const KEYRING_SERVICE_NAME: &str = "kith";
const CHECK_KEY: &str = "keychainCheck";

/// Stores each record as a keychain entry named after its key
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE_NAME.to_string(),
        }
    }

    fn entry(&self, key: &str) -> kith_core::Result<Entry> {
        Entry::new(&self.service, key).map_err(map_keyring_error)
    }

    /// Fail unless a value written through one entry reads back through another.
    ///
    /// Without a platform store, keyring hands out a per-entry in-memory mock
    /// that forgets everything once the entry is dropped.
    pub async fn ensure_persistent(&self) -> kith_core::Result<()> {
        let marker = Utc::now().to_rfc3339();
        let stored = match self.set(CHECK_KEY, &marker).await {
            Ok(()) => self.get(CHECK_KEY).await,
            Err(error) => Err(error),
        };
        match stored {
            Ok(Some(value)) if value == marker => Ok(()),
            Ok(_) => Err(Error::Config(
                "the OS keychain does not persist on this platform; use the database backend"
                    .to_string(),
            )),
            Err(error) => Err(Error::Config(format!(
                "the OS keychain is unavailable ({error}); use the database backend"
            ))),
        }
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for KeyringStore {
    async fn get(&self, key: &str) -> kith_core::Result<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(map_keyring_error(error)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> kith_core::Result<()> {
        self.entry(key)?
            .set_password(value)
            .map_err(map_keyring_error)
    }
}

fn map_keyring_error(error: keyring::Error) -> Error {
    Error::Storage(format!("keychain: {error}"))
}
