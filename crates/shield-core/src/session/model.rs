//! Practice session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a practice session was run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// Reading from a prepared script.
    Script,
    /// Free-form speaking without a script.
    Free,
}

/// A completed practice session as recorded by the backend.
///
/// Sessions are owned by the backend and read-only from the client's
/// perspective; the client only derives views (timelines, badge awards)
/// from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique session identifier
    pub id: String,
    /// When the session took place (ISO 8601 on the wire)
    pub date: DateTime<Utc>,
    /// Script or free mode
    pub mode: SessionMode,
    /// Whether a script was open during the session
    pub script_used: bool,
    /// Number of times the user restarted the recording
    #[serde(default)]
    pub retries: u32,
    /// Optional free-text note written after the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Optional self-assigned rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl Session {
    /// Returns true when the session carries a non-empty note.
    pub fn has_note(&self) -> bool {
        self.note.as_deref().is_some_and(|n| !n.is_empty())
    }
}
