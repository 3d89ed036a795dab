//! JSON-file-backed KeyValueStore implementation.
//!
//! Each key is stored as one JSON document under the store directory:
//!
//! ```text
//! store/
//! ├── custom-scripts.json
//! ├── cringe-shield-self-reflections.json
//! └── hasSeenTutorial.json
//! ```
//!
//! A missing file reads as `None`; corruption recovery happens above this
//! layer (see `shield_core::store::StoreExt`).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use shield_core::store::KeyValueStore;

use crate::paths::ShieldPaths;

/// File-per-key store rooted at a single directory.
pub struct JsonFileStore {
    store_dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `store_dir`, creating the directory if
    /// needed.
    pub fn new(store_dir: impl AsRef<Path>) -> Result<Self> {
        let store_dir = store_dir.as_ref().to_path_buf();
        fs::create_dir_all(&store_dir).context("Failed to create store directory")?;
        Ok(Self { store_dir })
    }

    /// Creates a store at the default location
    /// (`<config_dir>/cringe-shield/store`).
    pub fn default_location() -> Result<Self> {
        let store_dir = ShieldPaths::store_dir()
            .map_err(|e| anyhow::anyhow!("Failed to resolve store directory: {}", e))?;
        Self::new(store_dir)
    }

    /// Returns the file path for a given store key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.store_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> shield_core::Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> shield_core::Result<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> shield_core::Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shield_core::script::CustomScript;
    use shield_core::store::{StoreExt, keys};
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).unwrap();

        assert_eq!(store.read("nothing").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).unwrap();

        store.write("greeting", "\"hello\"").unwrap();
        assert_eq!(store.read("greeting").unwrap().as_deref(), Some("\"hello\""));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).unwrap();

        store.write("gone", "1").unwrap();
        store.remove("gone").unwrap();
        store.remove("gone").unwrap();
        assert_eq!(store.read("gone").unwrap(), None);
    }

    #[test]
    fn test_script_list_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).unwrap();

        let scripts = vec![
            CustomScript::new("One", "first"),
            CustomScript::new("Two", "second"),
            CustomScript::new("Three", "third"),
        ];
        store.save(keys::CUSTOM_SCRIPTS, &scripts);

        let loaded: Vec<CustomScript> = store.load_or_default(keys::CUSTOM_SCRIPTS);
        assert_eq!(loaded, scripts);
    }

    #[test]
    fn test_corrupted_file_loads_as_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).unwrap();

        store.write(keys::SELF_REFLECTIONS, "{definitely not json").unwrap();

        let loaded: Vec<shield_core::reflection::SelfReflection> =
            store.load_or_default(keys::SELF_REFLECTIONS);
        assert!(loaded.is_empty());
    }
}
