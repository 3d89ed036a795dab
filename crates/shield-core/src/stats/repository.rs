//! User stats API trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::stats::model::UserStats;

/// Remote API for the backend-computed lifetime statistics.
#[async_trait]
pub trait UserStatsApi: Send + Sync {
    /// Fetches the current user's lifetime stats.
    async fn fetch_stats(&self) -> Result<UserStats>;
}
