//! Load/save lifecycle binding a reducer-driven store to durable storage.
//!
//! A store reads its key once when opened and writes a full snapshot back after
//! every dispatch. There is no append log and no merge on write: the last
//! writer of a key wins.

use crate::error::{Result, StoreError};
use crate::reducer::Reducer;
use crate::storage::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

pub struct PersistenceAdapter {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl PersistenceAdapter {
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads and parses the stored document. A missing key is `Ok(None)`; a
    /// document that does not parse is an error the caller cannot recover from.
    pub fn load<P: DeserializeOwned>(&self) -> Result<Option<P>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::MalformedPayload {
                key: self.key.clone(),
                source,
            })
    }

    pub fn save<S: Serialize>(&self, state: &S) -> Result<()> {
        let raw = serde_json::to_string(state)?;
        self.storage.set(&self.key, &raw)
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.key)
    }
}

pub struct Store<R: Reducer> {
    state: R::State,
    persistence: PersistenceAdapter,
}

impl<R: Reducer> Store<R> {
    /// Starts from `initial`, merges whatever is persisted under the adapter's
    /// key, then writes the merged state back.
    pub fn open(initial: R::State, persistence: PersistenceAdapter) -> Result<Self> {
        let mut store = Self {
            state: initial,
            persistence,
        };

        match store.persistence.load::<R::Patch>()? {
            Some(patch) => {
                store.state = R::reduce(&store.state, &R::load_action(patch));
                tracing::info!(key = store.persistence.key(), "Restored persisted state");
            }
            None => {
                tracing::info!(key = store.persistence.key(), "No persisted state, using seed data");
            }
        }

        store.persistence.save(&store.state)?;
        Ok(store)
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Applies `action` and persists the resulting state.
    ///
    /// The new state is kept in memory even if the write fails; the error is
    /// logged and returned so the caller can surface it.
    pub fn dispatch(&mut self, action: R::Action) -> Result<()> {
        tracing::debug!(?action, key = self.persistence.key(), "Dispatching");
        self.state = R::reduce(&self.state, &action);

        if let Err(e) = self.persistence.save(&self.state) {
            tracing::error!(key = self.persistence.key(), error = %e, "Failed to persist state");
            return Err(e);
        }

        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }

    pub fn persistence(&self) -> &PersistenceAdapter {
        &self.persistence
    }
}
