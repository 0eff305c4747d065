//! Persistent exclusion list.

use crate::error::Result;
use crate::models::{ContactId, ExclusionSet};
use crate::storage::{load_json, save_json, KeyValueStore, EXCLUSION_KEY};

/// Append-only store of contacts the user never wants to see again
pub struct ExclusionStore<'a, S: KeyValueStore> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> ExclusionStore<'a, S> {
    /// Create an exclusion store over `store`
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load the current set, empty when nothing has been excluded yet
    pub async fn list(&self) -> Result<ExclusionSet> {
        Ok(load_json(self.store, EXCLUSION_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Append `id` and persist. Returns once the write has completed.
    pub async fn exclude(&self, id: &ContactId) -> Result<()> {
        let mut set = self.list().await?;
        set.push(id.clone());
        save_json(self.store, EXCLUSION_KEY, &set).await?;
        tracing::info!("Excluded contact {} ({} total)", id, set.len());
        Ok(())
    }

    /// Membership test against the persisted set
    pub async fn is_excluded(&self, id: &ContactId) -> Result<bool> {
        Ok(self.list().await?.contains(id))
    }
}
