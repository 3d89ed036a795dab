//! Client-side session timeline derivation.
//!
//! The backend returns a flat session list; the timeline view needs it
//! sorted most-recent-first and bucketed by calendar month in the user's
//! local time zone. `"YYYY-MM"` keys sort lexicographically in
//! chronological order, so a `BTreeMap` keeps the buckets ordered across
//! year boundaries without extra work.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::session::Session;

/// One month's session count for timeline rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    /// Month key in `"YYYY-MM"` form
    pub month: String,
    /// Number of sessions recorded in that month
    pub count: usize,
}

/// Derived view of the user's session history.
#[derive(Debug, Clone, Default)]
pub struct SessionTimeline {
    /// All sessions, sorted most-recent-first
    pub sessions: Vec<Session>,
    /// Per-month session counts keyed `"YYYY-MM"`, chronologically ordered
    pub by_month: BTreeMap<String, usize>,
}

impl SessionTimeline {
    /// Builds the timeline view from a raw session list.
    ///
    /// An empty input yields empty derived structures, not an error.
    pub fn from_sessions(mut sessions: Vec<Session>) -> Self {
        // Sort by date descending (most recent first)
        sessions.sort_by(|a, b| b.date.cmp(&a.date));

        let mut by_month: BTreeMap<String, usize> = BTreeMap::new();
        for session in &sessions {
            *by_month.entry(month_key(&session.date)).or_insert(0) += 1;
        }

        Self { sessions, by_month }
    }

    /// Flattens the month buckets into a chronologically sorted sequence.
    pub fn timeline(&self) -> Vec<MonthCount> {
        self.by_month
            .iter()
            .map(|(month, count)| MonthCount {
                month: month.clone(),
                count: *count,
            })
            .collect()
    }

    /// Returns the most recently recorded session, if any.
    pub fn latest(&self) -> Option<&Session> {
        self.sessions.first()
    }

    /// Total number of sessions in the timeline.
    pub fn total(&self) -> usize {
        self.sessions.len()
    }
}

/// Formats a session date as a `"YYYY-MM"` bucket key in local time.
pub fn month_key(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionMode;
    use chrono::TimeZone;

    // Noon UTC keeps the local-time month stable for every real UTC offset.
    fn session_on(id: &str, year: i32, month: u32, day: u32) -> Session {
        Session {
            id: id.to_string(),
            date: Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
            mode: SessionMode::Free,
            script_used: false,
            retries: 0,
            note: None,
            rating: None,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_timeline() {
        let timeline = SessionTimeline::from_sessions(Vec::new());
        assert!(timeline.sessions.is_empty());
        assert!(timeline.by_month.is_empty());
        assert!(timeline.timeline().is_empty());
        assert!(timeline.latest().is_none());
    }

    #[test]
    fn test_sessions_sorted_most_recent_first() {
        let timeline = SessionTimeline::from_sessions(vec![
            session_on("old", 2025, 1, 5),
            session_on("newest", 2025, 3, 20),
            session_on("middle", 2025, 2, 11),
        ]);

        let ids: Vec<&str> = timeline.sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["newest", "middle", "old"]);
        assert_eq!(timeline.latest().unwrap().id, "newest");
    }

    #[test]
    fn test_month_buckets_count_sessions() {
        let timeline = SessionTimeline::from_sessions(vec![
            session_on("a", 2025, 2, 3),
            session_on("b", 2025, 2, 14),
            session_on("c", 2025, 3, 1),
        ]);

        let counts = timeline.timeline();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].count, 1);
    }

    #[test]
    fn test_year_boundary_orders_chronologically() {
        let december = session_on("dec", 2024, 12, 15);
        let january = session_on("jan", 2025, 1, 2);
        let expected = vec![month_key(&december.date), month_key(&january.date)];

        let timeline = SessionTimeline::from_sessions(vec![january, december]);

        let months: Vec<String> = timeline.timeline().into_iter().map(|m| m.month).collect();
        assert_eq!(months, expected);
        // Lexicographic order of "YYYY-MM" is chronological across years
        assert!(months[0] < months[1]);
    }
}
