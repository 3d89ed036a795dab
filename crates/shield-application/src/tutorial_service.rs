//! First-run tutorial flag.

use std::sync::Arc;

use shield_core::store::{KeyValueStore, StoreExt, keys};

/// Tracks whether the first-run tutorial hint has been shown.
pub struct TutorialService {
    store: Arc<dyn KeyValueStore>,
}

impl TutorialService {
    /// Creates a service over the given store backend.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Whether the tutorial hint has already been shown.
    pub fn has_seen_tutorial(&self) -> bool {
        self.store.load_or_default(keys::HAS_SEEN_TUTORIAL)
    }

    /// Marks the tutorial hint as shown.
    pub fn mark_tutorial_seen(&self) {
        self.store.save(keys::HAS_SEEN_TUTORIAL, &true);
    }
}
