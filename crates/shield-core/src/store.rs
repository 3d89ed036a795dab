//! Injectable key-value storage contract.
//!
//! Small user-owned artifacts (the script library, self-reflections, the
//! tutorial flag) live in a persistent key-value store. The backing medium
//! is abstracted behind [`KeyValueStore`] so alternate backends (in-memory
//! for tests, JSON files for the CLI) satisfy the same contract.
//!
//! Reads of corrupted values must never propagate to callers: the typed
//! layer in [`StoreExt`] discards the stored value, logs a warning, and
//! returns the default instead.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Well-known store keys.
pub mod keys {
    /// The user's practice script library (`Vec<CustomScript>`).
    pub const CUSTOM_SCRIPTS: &str = "custom-scripts";
    /// Logged self-reflections, newest first (`Vec<SelfReflection>`).
    pub const SELF_REFLECTIONS: &str = "cringe-shield-self-reflections";
    /// Whether the first-run tutorial hint has been shown (`bool`).
    pub const HAS_SEEN_TUTORIAL: &str = "hasSeenTutorial";
}

/// Raw storage contract for small user-owned artifacts.
///
/// Values are opaque strings; serialization lives in [`StoreExt`]. Reads
/// and writes are synchronous, the underlying medium's latency is assumed
/// negligible.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`. Absent keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Typed, fail-soft layer over [`KeyValueStore`].
pub trait StoreExt: KeyValueStore {
    /// Loads and deserializes the value under `key`.
    ///
    /// Fails soft: a read failure or corrupted stored value is logged and
    /// replaced by `T::default()`, never surfaced to the caller.
    fn load_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.read(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = %e, "discarding corrupted stored value");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored value");
                T::default()
            }
        }
    }

    /// Serializes and stores `value` under `key`.
    ///
    /// Persistence failures must not crash the caller: the attempt is made
    /// and any error is logged and swallowed.
    fn save<T>(&self, key: &str, value: &T)
    where
        T: Serialize,
    {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize value for storage");
                return;
            }
        };

        if let Err(e) = self.write(key, &raw) {
            tracing::warn!(key, error = %e, "failed to persist value");
        }
    }
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct TestStore {
        entries: Mutex<HashMap<String, String>>,
    }

    impl KeyValueStore for TestStore {
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

    #[test]
    fn test_save_and_load_round_trip() {
        let store = TestStore::default();
        store.save("numbers", &vec![1u32, 2, 3]);

        let loaded: Vec<u32> = store.load_or_default("numbers");
        assert_eq!(loaded, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_key_yields_default() {
        let store = TestStore::default();
        let loaded: Vec<u32> = store.load_or_default("nothing-here");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_corrupted_value_yields_default() {
        let store = TestStore::default();
        store.write("numbers", "{not valid json").unwrap();

        let loaded: Vec<u32> = store.load_or_default("numbers");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_boolean_flag_round_trip() {
        let store = TestStore::default();
        assert!(!store.load_or_default::<bool>(keys::HAS_SEEN_TUTORIAL));

        store.save(keys::HAS_SEEN_TUTORIAL, &true);
        assert_eq!(
            store.read(keys::HAS_SEEN_TUTORIAL).unwrap().as_deref(),
            Some("true")
        );
        assert!(store.load_or_default::<bool>(keys::HAS_SEEN_TUTORIAL));
    }
}
