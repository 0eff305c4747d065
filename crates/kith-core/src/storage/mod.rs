//! Key-value persistence for Kith's records.
//!
//! Kith keeps exactly a handful of JSON blobs under fixed keys. Any backend that
//! can get and set strings by key works: the in-memory store for tests, the
//! libSQL table in [`crate::db`], or an OS keychain in the CLI.

mod memory;

pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Key holding the current [`crate::models::DailyPick`]
pub const DAILY_PICK_KEY: &str = "currentContact";
/// Key holding the [`crate::models::ExclusionSet`]
pub const EXCLUSION_KEY: &str = "blacklisted";
/// Key holding the last [`crate::models::ScheduledReminder`]
pub const REMINDER_KEY: &str = "scheduledReminder";

/// Trait for key-value storage operations (async)
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Read and deserialize a JSON record
pub async fn load_json<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

/// Serialize and write a JSON record
pub async fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactId, ExclusionSet};

    #[tokio::test]
    async fn test_load_json_missing_key_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<ExclusionSet> = load_json(&store, EXCLUSION_KEY).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_json_record_survives_store() {
        let store = MemoryStore::new();
        let set: ExclusionSet = [ContactId::new("x")].into_iter().collect();
        save_json(&store, EXCLUSION_KEY, &set).await.unwrap();

        assert_eq!(
            store.get(EXCLUSION_KEY).await.unwrap().as_deref(),
            Some(r#"["x"]"#)
        );
        let loaded: Option<ExclusionSet> = load_json(&store, EXCLUSION_KEY).await.unwrap();
        assert_eq!(loaded, Some(set));
    }

    #[tokio::test]
    async fn test_corrupt_record_is_serialization_error() {
        let store = MemoryStore::new();
        store.set(EXCLUSION_KEY, "{not json").await.unwrap();
        let result: Result<Option<ExclusionSet>> = load_json(&store, EXCLUSION_KEY).await;
        assert!(matches!(result, Err(crate::Error::Serialization(_))));
    }
}
