//! Challenge progress domain models.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The challenge length is fixed, not derived from the data.
pub const TOTAL_DAYS: u8 = 30;

/// One completed challenge day as recorded by the backend.
///
/// The backend enforces at most one entry per (user, day); the client
/// treats a day as completed iff at least one entry exists for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeProgressEntry {
    /// Challenge day in [1, 30]
    pub day_number: u8,
    /// When the day was marked complete
    pub completed_at: DateTime<Utc>,
}

/// Derived completion state for the fixed 30-day sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallengeProgress {
    completed: BTreeSet<u8>,
}

impl ChallengeProgress {
    /// Derives the completed-day set from backend entries.
    ///
    /// Duplicate entries for a day collapse into one, and out-of-range day
    /// numbers are ignored, so a noisy payload can never push the
    /// percentage past 100.
    pub fn from_entries(entries: &[ChallengeProgressEntry]) -> Self {
        let completed = entries
            .iter()
            .map(|entry| entry.day_number)
            .filter(|day| (1..=TOTAL_DAYS).contains(day))
            .collect();
        Self { completed }
    }

    /// Whether the given day has at least one completion entry.
    pub fn is_completed(&self, day: u8) -> bool {
        self.completed.contains(&day)
    }

    /// Number of distinct completed days.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Completed day numbers in ascending order.
    pub fn completed_days(&self) -> impl Iterator<Item = u8> + '_ {
        self.completed.iter().copied()
    }

    /// Completion percentage, rounded to the nearest whole percent.
    pub fn percent(&self) -> u8 {
        let ratio = self.completed_count() as f64 / f64::from(TOTAL_DAYS);
        (ratio * 100.0).round() as u8
    }

    /// True once all 30 days are complete.
    pub fn is_finished(&self) -> bool {
        self.completed_count() == usize::from(TOTAL_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u8) -> ChallengeProgressEntry {
        ChallengeProgressEntry {
            day_number: day,
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn test_percent_boundaries() {
        assert_eq!(ChallengeProgress::from_entries(&[]).percent(), 0);

        let one = ChallengeProgress::from_entries(&[entry(1)]);
        assert_eq!(one.percent(), 3); // round(1/30 * 100)

        let all: Vec<_> = (1..=TOTAL_DAYS).map(entry).collect();
        let full = ChallengeProgress::from_entries(&all);
        assert_eq!(full.percent(), 100);
        assert!(full.is_finished());
    }

    #[test]
    fn test_duplicate_entries_are_idempotent() {
        let progress = ChallengeProgress::from_entries(&[entry(7), entry(7), entry(7)]);
        assert_eq!(progress.completed_count(), 1);
        assert_eq!(progress.percent(), 3);
        assert!(progress.is_completed(7));
    }

    #[test]
    fn test_out_of_range_days_are_ignored() {
        let progress = ChallengeProgress::from_entries(&[entry(0), entry(31), entry(200), entry(5)]);
        assert_eq!(progress.completed_count(), 1);
        assert!(progress.is_completed(5));
        assert!(!progress.is_completed(31));
    }

    #[test]
    fn test_completed_days_sorted() {
        let progress = ChallengeProgress::from_entries(&[entry(9), entry(2), entry(30)]);
        let days: Vec<u8> = progress.completed_days().collect();
        assert_eq!(days, vec![2, 9, 30]);
    }

    #[test]
    fn test_entry_wire_field_names() {
        let parsed: ChallengeProgressEntry =
            serde_json::from_str(r#"{"dayNumber":4,"completedAt":"2025-02-01T08:30:00Z"}"#)
                .unwrap();
        assert_eq!(parsed.day_number, 4);
    }
}
