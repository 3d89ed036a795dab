//! Reflection repository trait.

use crate::error::Result;
use crate::reflection::model::SelfReflection;

/// Repository for the locally stored reflection log.
pub trait ReflectionRepository: Send + Sync {
    /// Appends a reflection at the head of the log (newest first).
    fn add(&self, reflection: SelfReflection) -> Result<()>;

    /// Returns the full log, newest first.
    fn list(&self) -> Result<Vec<SelfReflection>>;

    /// Returns reflections logged within the last `days` days, newest
    /// first.
    fn recent(&self, days: i64) -> Result<Vec<SelfReflection>>;
}
