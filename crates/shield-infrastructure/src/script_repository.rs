//! KeyValueStore-backed ScriptRepository implementation.
//!
//! The whole library lives under one store key as a JSON list. Writes go
//! through the fail-soft `StoreExt::save`, so a broken medium degrades to
//! an unsaved change rather than a crash.

use std::sync::Arc;

use shield_core::script::{CustomScript, ScriptRepository, default_scripts};
use shield_core::store::{KeyValueStore, StoreExt, keys};
use shield_core::{Result, ShieldError};
use uuid::Uuid;

/// Script library stored under the `custom-scripts` key.
pub struct LocalScriptRepository {
    store: Arc<dyn KeyValueStore>,
}

impl LocalScriptRepository {
    /// Creates a repository over the given store backend.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Vec<CustomScript> {
        self.store.load_or_default(keys::CUSTOM_SCRIPTS)
    }

    fn persist(&self, scripts: &[CustomScript]) {
        self.store.save(keys::CUSTOM_SCRIPTS, &scripts);
    }
}

impl ScriptRepository for LocalScriptRepository {
    fn list(&self) -> Result<Vec<CustomScript>> {
        Ok(self.load())
    }

    fn get(&self, id: Uuid) -> Result<Option<CustomScript>> {
        Ok(self.load().into_iter().find(|script| script.id == id))
    }

    fn add(&self, title: &str, text: &str) -> Result<CustomScript> {
        let script = CustomScript::new(title, text);
        let mut scripts = self.load();
        scripts.push(script.clone());
        self.persist(&scripts);
        Ok(script)
    }

    fn update(&self, id: Uuid, title: &str, text: &str) -> Result<CustomScript> {
        let mut scripts = self.load();
        let script = scripts
            .iter_mut()
            .find(|script| script.id == id)
            .ok_or_else(|| ShieldError::not_found("custom script", id.to_string()))?;

        script.title = title.to_string();
        script.text = text.to_string();
        let updated = script.clone();

        self.persist(&scripts);
        Ok(updated)
    }

    fn delete(&self, id: Uuid) -> Result<()> {
        let mut scripts = self.load();
        let before = scripts.len();
        scripts.retain(|script| script.id != id);

        if scripts.len() != before {
            self.persist(&scripts);
        }
        Ok(())
    }

    fn ensure_seeded(&self) -> Result<bool> {
        if !self.load().is_empty() {
            return Ok(false);
        }

        let seeded = default_scripts();
        tracing::debug!(count = seeded.len(), "seeding default script library");
        self.persist(&seeded);
        Ok(true)
    }
}
