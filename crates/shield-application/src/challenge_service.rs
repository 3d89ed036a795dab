//! Challenge progress tracking with cached reads.
//!
//! The completed-day set is remote-derived state; reads are served from a
//! lazily filled cache, and a successful mutation invalidates and refetches
//! it so subsequent reads observe the write.

use std::sync::Arc;

use shield_core::challenge::{ChallengeApi, ChallengeProgress, TOTAL_DAYS};
use shield_core::{Result, ShieldError};
use tokio::sync::RwLock;

/// Service tracking the user's 30-day challenge.
pub struct ChallengeService {
    api: Arc<dyn ChallengeApi>,
    /// Cached view of the completed-day set.
    /// `None` means not yet fetched or invalidated.
    cache: RwLock<Option<ChallengeProgress>>,
}

impl ChallengeService {
    /// Creates a service over the given API handle.
    pub fn new(api: Arc<dyn ChallengeApi>) -> Self {
        Self {
            api,
            cache: RwLock::new(None),
        }
    }

    /// Returns the current progress, fetching it on first access.
    pub async fn progress(&self) -> Result<ChallengeProgress> {
        {
            let cached = self.cache.read().await;
            if let Some(ref progress) = *cached {
                return Ok(progress.clone());
            }
        }

        self.refresh().await
    }

    /// Fetches the progress from the backend and fills the cache.
    pub async fn refresh(&self) -> Result<ChallengeProgress> {
        let entries = self.api.list_progress().await?;
        let progress = ChallengeProgress::from_entries(&entries);

        tracing::debug!(
            completed = progress.completed_count(),
            percent = progress.percent(),
            "challenge progress cache filled"
        );

        let mut cached = self.cache.write().await;
        *cached = Some(progress.clone());
        Ok(progress)
    }

    /// Whether the given day is completed, per the cached set.
    pub async fn is_day_completed(&self, day: u8) -> Result<bool> {
        Ok(self.progress().await?.is_completed(day))
    }

    /// Marks a day complete and returns the refreshed progress.
    ///
    /// Completing an already-completed day is accepted silently and issues
    /// no request; the backend stays the source of truth for uniqueness.
    pub async fn complete_day(&self, day: u8) -> Result<ChallengeProgress> {
        if !(1..=TOTAL_DAYS).contains(&day) {
            return Err(ShieldError::validation(format!(
                "day {day} is outside the challenge range 1..={TOTAL_DAYS}"
            )));
        }

        let progress = self.progress().await?;
        if progress.is_completed(day) {
            return Ok(progress);
        }

        self.api.complete_day(day).await?;
        self.invalidate().await;
        self.refresh().await
    }

    /// Drops the cached view so the next read refetches.
    pub async fn invalidate(&self) {
        let mut cached = self.cache.write().await;
        *cached = None;
    }
}
