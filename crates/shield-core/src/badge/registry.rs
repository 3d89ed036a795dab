//! The static badge registry.
//!
//! The session-count badges (Regular/Dedicated/Master) are cumulative, not
//! mutually exclusive: at 25 sessions all three fire together.

use crate::badge::model::Badge;
use crate::session::{Session, SessionMode};
use crate::stats::UserStats;

/// Every badge the application can award.
pub const BADGES: &[Badge] = &[
    Badge {
        id: "first-step",
        name: "First Step",
        icon: "🏁",
        predicate: first_step,
    },
    Badge {
        id: "smooth-reader",
        name: "Smooth Reader",
        icon: "📖",
        predicate: smooth_reader,
    },
    Badge {
        id: "free-spirit",
        name: "Free Spirit",
        icon: "🕊️",
        predicate: free_spirit,
    },
    Badge {
        id: "bounce-back",
        name: "Bounce Back",
        icon: "🔁",
        predicate: bounce_back,
    },
    Badge {
        id: "reflector",
        name: "Reflector",
        icon: "📝",
        predicate: reflector,
    },
    Badge {
        id: "regular",
        name: "Regular",
        icon: "📅",
        predicate: regular,
    },
    Badge {
        id: "dedicated",
        name: "Dedicated",
        icon: "🏆",
        predicate: dedicated,
    },
    Badge {
        id: "master",
        name: "Master",
        icon: "👑",
        predicate: master,
    },
];

fn first_step(_session: &Session, stats: &UserStats) -> bool {
    stats.total_sessions == 1
}

fn smooth_reader(session: &Session, _stats: &UserStats) -> bool {
    session.script_used
}

fn free_spirit(session: &Session, _stats: &UserStats) -> bool {
    session.mode == SessionMode::Free
}

fn bounce_back(session: &Session, _stats: &UserStats) -> bool {
    session.retries > 0
}

fn reflector(session: &Session, _stats: &UserStats) -> bool {
    session.has_note()
}

fn regular(_session: &Session, stats: &UserStats) -> bool {
    stats.total_sessions >= 5
}

fn dedicated(_session: &Session, stats: &UserStats) -> bool {
    stats.total_sessions >= 10
}

fn master(_session: &Session, stats: &UserStats) -> bool {
    stats.total_sessions >= 25
}

/// Evaluates the full registry against a just-completed session.
///
/// Pure and deterministic; a session may earn zero, one, or many badges.
pub fn evaluate(session: &Session, stats: &UserStats) -> Vec<&'static Badge> {
    BADGES
        .iter()
        .filter(|badge| badge.earned_by(session, stats))
        .collect()
}

/// Like [`evaluate`], but returns the display names only.
pub fn earned_names(session: &Session, stats: &UserStats) -> Vec<&'static str> {
    evaluate(session, stats)
        .into_iter()
        .map(|badge| badge.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session() -> Session {
        Session {
            id: "s1".to_string(),
            date: Utc::now(),
            mode: SessionMode::Script,
            script_used: false,
            retries: 0,
            note: None,
            rating: None,
        }
    }

    fn stats_with_sessions(total_sessions: u32) -> UserStats {
        UserStats {
            total_sessions,
            ..UserStats::default()
        }
    }

    #[test]
    fn test_first_session_earns_first_step() {
        let names = earned_names(&session(), &stats_with_sessions(1));
        assert!(names.contains(&"First Step"));

        let names = earned_names(&session(), &stats_with_sessions(2));
        assert!(!names.contains(&"First Step"));
    }

    #[test]
    fn test_count_thresholds() {
        for (n, regular, dedicated, master) in [
            (1, false, false, false),
            (4, false, false, false),
            (5, true, false, false),
            (9, true, false, false),
            (10, true, true, false),
            (24, true, true, false),
            (25, true, true, true),
            (100, true, true, true),
        ] {
            let names = earned_names(&session(), &stats_with_sessions(n));
            assert_eq!(names.contains(&"Regular"), regular, "n = {n}");
            assert_eq!(names.contains(&"Dedicated"), dedicated, "n = {n}");
            assert_eq!(names.contains(&"Master"), master, "n = {n}");
        }
    }

    #[test]
    fn test_thresholds_are_cumulative_at_25() {
        let names = earned_names(&session(), &stats_with_sessions(25));
        assert!(names.contains(&"Regular"));
        assert!(names.contains(&"Dedicated"));
        assert!(names.contains(&"Master"));
    }

    #[test]
    fn test_bounce_back_requires_retries() {
        let stats = stats_with_sessions(3);

        let mut s = session();
        s.retries = 0;
        assert!(!earned_names(&s, &stats).contains(&"Bounce Back"));

        s.retries = 3;
        assert!(earned_names(&s, &stats).contains(&"Bounce Back"));
    }

    #[test]
    fn test_mode_and_script_badges() {
        let stats = stats_with_sessions(3);

        let mut s = session();
        s.script_used = true;
        s.mode = SessionMode::Script;
        let names = earned_names(&s, &stats);
        assert!(names.contains(&"Smooth Reader"));
        assert!(!names.contains(&"Free Spirit"));

        let mut s = session();
        s.mode = SessionMode::Free;
        let names = earned_names(&s, &stats);
        assert!(names.contains(&"Free Spirit"));
        assert!(!names.contains(&"Smooth Reader"));
    }

    #[test]
    fn test_reflector_requires_non_empty_note() {
        let stats = stats_with_sessions(3);

        let mut s = session();
        s.note = Some(String::new());
        assert!(!earned_names(&s, &stats).contains(&"Reflector"));

        s.note = Some("solid run".to_string());
        assert!(earned_names(&s, &stats).contains(&"Reflector"));
    }

    #[test]
    fn test_session_can_earn_many_badges_at_once() {
        let mut s = session();
        s.mode = SessionMode::Free;
        s.retries = 2;
        s.note = Some("kept going".to_string());

        let names = earned_names(&s, &stats_with_sessions(25));
        assert_eq!(
            names,
            vec![
                "Free Spirit",
                "Bounce Back",
                "Reflector",
                "Regular",
                "Dedicated",
                "Master"
            ]
        );
    }

    #[test]
    fn test_registry_ids_are_unique() {
        let mut ids: Vec<&str> = BADGES.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), BADGES.len());
    }
}
