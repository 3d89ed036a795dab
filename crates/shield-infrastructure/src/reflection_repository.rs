//! KeyValueStore-backed ReflectionRepository implementation.
//!
//! Reflections are kept newest-first in a single JSON list so "recent"
//! queries read the head of the list in insertion order.

use std::sync::Arc;

use chrono::{Duration, Utc};
use shield_core::Result;
use shield_core::reflection::{ReflectionRepository, SelfReflection};
use shield_core::store::{KeyValueStore, StoreExt, keys};

/// Reflection log stored under the `cringe-shield-self-reflections` key.
pub struct LocalReflectionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl LocalReflectionRepository {
    /// Creates a repository over the given store backend.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Vec<SelfReflection> {
        self.store.load_or_default(keys::SELF_REFLECTIONS)
    }
}

impl ReflectionRepository for LocalReflectionRepository {
    fn add(&self, reflection: SelfReflection) -> Result<()> {
        let mut reflections = self.load();
        // Newest entries live at the head
        reflections.insert(0, reflection);
        self.store.save(keys::SELF_REFLECTIONS, &reflections);
        Ok(())
    }

    fn list(&self) -> Result<Vec<SelfReflection>> {
        Ok(self.load())
    }

    fn recent(&self, days: i64) -> Result<Vec<SelfReflection>> {
        let cutoff = Utc::now() - Duration::days(days);
        Ok(self
            .load()
            .into_iter()
            .filter(|reflection| reflection.date >= cutoff)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_store::InMemoryStore;

    fn repository() -> LocalReflectionRepository {
        LocalReflectionRepository::new(Arc::new(InMemoryStore::new()))
    }

    fn reflection_days_ago(days: i64, rating: u8) -> SelfReflection {
        SelfReflection {
            date: Utc::now() - Duration::days(days),
            rating,
            note: None,
        }
    }

    #[test]
    fn test_add_keeps_newest_first() {
        let repo = repository();
        repo.add(reflection_days_ago(2, 3)).unwrap();
        repo.add(reflection_days_ago(1, 4)).unwrap();
        repo.add(reflection_days_ago(0, 5)).unwrap();

        let ratings: Vec<u8> = repo.list().unwrap().iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![5, 4, 3]);
    }

    #[test]
    fn test_recent_filters_by_window() {
        let repo = repository();
        repo.add(reflection_days_ago(30, 2)).unwrap();
        repo.add(reflection_days_ago(3, 4)).unwrap();
        repo.add(reflection_days_ago(1, 5)).unwrap();

        let recent = repo.recent(7).unwrap();
        let ratings: Vec<u8> = recent.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![5, 4]);
    }

    #[test]
    fn test_corrupted_log_reads_as_empty() {
        let store = Arc::new(InMemoryStore::new());
        store.write(keys::SELF_REFLECTIONS, "[{broken").unwrap();

        let repo = LocalReflectionRepository::new(store);
        assert!(repo.list().unwrap().is_empty());
    }
}
