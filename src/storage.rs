//! Durable string-keyed storage that store snapshots are written to.

use crate::error::{Result, StoreError};
use std::collections::HashMap;
use std::sync::RwLock;

/// A persistent key-value store holding one serialized document per key.
///
/// Writes replace the previous value outright; there is no conflict detection.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory storage for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_overwrites_and_removes() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("restaurantData").unwrap(), None);

        storage.set("restaurantData", "{}").unwrap();
        storage.set("restaurantData", "{\"orders\":[]}").unwrap();
        assert_eq!(
            storage.get("restaurantData").unwrap().as_deref(),
            Some("{\"orders\":[]}")
        );

        storage.remove("restaurantData").unwrap();
        assert_eq!(storage.get("restaurantData").unwrap(), None);
    }
}
