//! Self-reflection logging service.

use std::sync::Arc;

use shield_core::reflection::{MAX_RATING, MIN_RATING, ReflectionRepository, SelfReflection};
use shield_core::{Result, ShieldError};

/// Service managing the local reflection log.
pub struct ReflectionService {
    repository: Arc<dyn ReflectionRepository>,
}

impl ReflectionService {
    /// Creates a service over the given repository.
    pub fn new(repository: Arc<dyn ReflectionRepository>) -> Self {
        Self { repository }
    }

    /// Logs a reflection after validating the rating bounds.
    pub fn record(&self, rating: u8, note: Option<String>) -> Result<SelfReflection> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ShieldError::validation(format!(
                "rating {rating} is outside the {MIN_RATING}..={MAX_RATING} scale"
            )));
        }

        let note = note.filter(|n| !n.trim().is_empty());
        let reflection = SelfReflection::new(rating, note);
        self.repository.add(reflection.clone())?;
        Ok(reflection)
    }

    /// Returns the full log, newest first.
    pub fn list(&self) -> Result<Vec<SelfReflection>> {
        self.repository.list()
    }

    /// Returns reflections from the last `days` days, newest first.
    pub fn recent(&self, days: i64) -> Result<Vec<SelfReflection>> {
        self.repository.recent(days)
    }

    /// Returns the last week's reflections.
    pub fn recent_week(&self) -> Result<Vec<SelfReflection>> {
        self.recent(7)
    }
}
