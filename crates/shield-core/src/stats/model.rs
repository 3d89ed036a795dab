//! Lifetime user statistics.

use serde::{Deserialize, Serialize};

/// Lifetime statistics computed by the backend.
///
/// The client fetches this aggregate as-is; only the per-month timeline
/// breakdown is derived client-side (see `SessionTimeline`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Total prompts the user has practiced against
    pub total_prompts: u32,
    /// Total recorded practice sessions
    pub total_sessions: u32,
    /// Longest run of consecutive practice days
    pub longest_streak: u32,
    /// Mean self-assigned rating across rated sessions
    #[serde(default)]
    pub average_rating: f32,
}
