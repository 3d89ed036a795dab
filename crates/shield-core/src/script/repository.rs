//! Script repository trait.

use uuid::Uuid;

use crate::error::Result;
use crate::script::model::CustomScript;

/// Repository for the locally stored script library.
pub trait ScriptRepository: Send + Sync {
    /// Returns every stored script.
    fn list(&self) -> Result<Vec<CustomScript>>;

    /// Looks up a single script by id.
    fn get(&self, id: Uuid) -> Result<Option<CustomScript>>;

    /// Creates and stores a new script.
    fn add(&self, title: &str, text: &str) -> Result<CustomScript>;

    /// Rewrites an existing script's title and text in place.
    fn update(&self, id: Uuid, title: &str, text: &str) -> Result<CustomScript>;

    /// Removes a script. Deleting an absent id is not an error.
    fn delete(&self, id: Uuid) -> Result<()>;

    /// Seeds the default template set when the library is genuinely empty.
    ///
    /// Returns `true` when seeding ran; a non-empty library is a no-op.
    fn ensure_seeded(&self) -> Result<bool>;
}
