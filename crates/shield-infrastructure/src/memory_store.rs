//! In-memory KeyValueStore implementation.
//!
//! Satisfies the same contract as [`crate::JsonFileStore`] without touching
//! disk. Used by tests and by embeddings that don't want persistence.

use std::collections::HashMap;
use std::sync::Mutex;

use shield_core::Result;
use shield_core::store::KeyValueStore;

/// Volatile store over a mutex-guarded map.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
