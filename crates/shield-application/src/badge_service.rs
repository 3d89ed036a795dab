//! Badge evaluation against live user stats.

use std::sync::Arc;

use shield_core::Result;
use shield_core::badge::{self, Badge};
use shield_core::session::Session;
use shield_core::stats::UserStatsApi;

/// Service awarding badges for a just-completed session.
///
/// The evaluation itself is pure (`shield_core::badge::evaluate`); this
/// service only supplies the cumulative stats it needs.
pub struct BadgeService {
    stats: Arc<dyn UserStatsApi>,
}

impl BadgeService {
    /// Creates a service over the given stats API handle.
    pub fn new(stats: Arc<dyn UserStatsApi>) -> Self {
        Self { stats }
    }

    /// Returns the badges the given session earns, in registry order.
    pub async fn badges_for(&self, session: &Session) -> Result<Vec<&'static Badge>> {
        let stats = self.stats.fetch_stats().await?;
        Ok(badge::evaluate(session, &stats))
    }
}
