use std::collections::BTreeMap;
use std::sync::Arc;

use super::entry::{Entry, EntryId};
use super::source::CatalogSource;
use crate::error::DraftError;

/// In-memory keyed collection of every known hero
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    entries: BTreeMap<EntryId, Arc<Entry>>,
}

impl CatalogStore {
    /// Build a store from entries. A repeated id replaces the earlier entry.
    pub fn new(entries: Vec<Entry>) -> Self {
        let mut map = BTreeMap::new();
        for entry in entries {
            let id = entry.id;
            if map.insert(id, Arc::new(entry)).is_some() {
                log::warn!("Duplicate hero id {} in catalog, keeping the last one", id);
            }
        }
        Self { entries: map }
    }

    /// Fetch the catalog once from `source`
    ///
    /// Any failure, including an empty catalog, is reported as
    /// [`DraftError::CatalogUnavailable`].
    pub async fn load<S: CatalogSource>(source: &S) -> Result<Self, DraftError> {
        let entries = source.fetch_catalog().await.map_err(|e| match e {
            DraftError::CatalogUnavailable(_) => e,
            other => DraftError::CatalogUnavailable(other.to_string()),
        })?;

        if entries.is_empty() {
            return Err(DraftError::CatalogUnavailable(
                "catalog contains no heroes".to_string(),
            ));
        }

        log::debug!("Loaded {} heroes into catalog", entries.len());
        Ok(Self::new(entries))
    }

    pub fn get(&self, id: EntryId) -> Option<&Arc<Entry>> {
        self.entries.get(&id)
    }

    /// Like [`get`](Self::get), but a missing id is an error
    pub fn require(&self, id: EntryId) -> Result<&Arc<Entry>, DraftError> {
        self.get(id).ok_or(DraftError::UnknownEntry(id))
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Entry>> {
        self.entries.values()
    }
}

#[cfg(test)]
#[path = "catalog_store_tests.rs"]
mod catalog_store_tests;
