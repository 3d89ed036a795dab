//! Lifetime stats and session timeline service.

use std::sync::Arc;

use shield_core::Result;
use shield_core::session::SessionApi;
use shield_core::stats::{SessionTimeline, UserStats, UserStatsApi};

/// Service for the stats screen: backend aggregates plus the client-side
/// timeline breakdown.
pub struct StatsService {
    sessions: Arc<dyn SessionApi>,
    stats: Arc<dyn UserStatsApi>,
}

impl StatsService {
    /// Creates a service over the given API handles.
    pub fn new(sessions: Arc<dyn SessionApi>, stats: Arc<dyn UserStatsApi>) -> Self {
        Self { sessions, stats }
    }

    /// Fetches the backend-computed lifetime stats.
    pub async fn user_stats(&self) -> Result<UserStats> {
        self.stats.fetch_stats().await
    }

    /// Fetches the session list and derives the timeline view.
    pub async fn session_timeline(&self) -> Result<SessionTimeline> {
        let sessions = self.sessions.list_sessions().await?;
        Ok(SessionTimeline::from_sessions(sessions))
    }
}
