//! Challenge API trait.

use async_trait::async_trait;

use crate::challenge::model::ChallengeProgressEntry;
use crate::error::Result;

/// Remote API for the 30-day challenge.
///
/// The backend is the source of truth for per-day uniqueness; completing a
/// day that is already complete is accepted, not an error.
#[async_trait]
pub trait ChallengeApi: Send + Sync {
    /// Fetches every completed-day entry for the current user.
    async fn list_progress(&self) -> Result<Vec<ChallengeProgressEntry>>;

    /// Server-confirmed point query for a single day.
    async fn is_day_completed(&self, day: u8) -> Result<bool>;

    /// Records the given day as complete and returns the created entry.
    async fn complete_day(&self, day: u8) -> Result<ChallengeProgressEntry>;
}
