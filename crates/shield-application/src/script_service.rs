//! Script library service.
//!
//! Validation lives here; storage details stay behind the repository
//! trait.

use std::sync::Arc;

use shield_core::script::{CustomScript, ScriptRepository};
use shield_core::{Result, ShieldError};
use uuid::Uuid;

pub use shield_core::script::DEFAULT_SCRIPTS;

/// Service managing the user's practice script library.
pub struct ScriptService {
    repository: Arc<dyn ScriptRepository>,
}

impl ScriptService {
    /// Creates a service over the given repository.
    pub fn new(repository: Arc<dyn ScriptRepository>) -> Self {
        Self { repository }
    }

    /// Seeds the default templates when the library is empty.
    /// Invoked once at startup.
    pub fn ensure_seeded(&self) -> Result<bool> {
        self.repository.ensure_seeded()
    }

    /// Returns every stored script.
    pub fn list(&self) -> Result<Vec<CustomScript>> {
        self.repository.list()
    }

    /// Looks up a single script by id.
    pub fn get(&self, id: Uuid) -> Result<Option<CustomScript>> {
        self.repository.get(id)
    }

    /// Creates a new script after validating its fields.
    pub fn add(&self, title: &str, text: &str) -> Result<CustomScript> {
        Self::validate(title, text)?;
        self.repository.add(title.trim(), text.trim())
    }

    /// Rewrites an existing script after validating its fields.
    pub fn update(&self, id: Uuid, title: &str, text: &str) -> Result<CustomScript> {
        Self::validate(title, text)?;
        self.repository.update(id, title.trim(), text.trim())
    }

    /// Removes a script from the library.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        self.repository.delete(id)
    }

    fn validate(title: &str, text: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(ShieldError::validation("script title must not be empty"));
        }
        if text.trim().is_empty() {
            return Err(ShieldError::validation("script text must not be empty"));
        }
        Ok(())
    }
}
