//! Self-reflection domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest allowed reflection rating.
pub const MIN_RATING: u8 = 1;
/// Highest allowed reflection rating.
pub const MAX_RATING: u8 = 5;

/// A self-reflection logged after practicing.
///
/// Reflections are append-only from the UI's perspective and stored
/// newest-first so "recent" queries preserve insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfReflection {
    /// When the reflection was logged
    pub date: DateTime<Utc>,
    /// Self-assigned rating on the 1..=5 scale
    pub rating: u8,
    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SelfReflection {
    /// Creates a reflection stamped with the current time.
    pub fn new(rating: u8, note: Option<String>) -> Self {
        Self {
            date: Utc::now(),
            rating,
            note,
        }
    }
}
