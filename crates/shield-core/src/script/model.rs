//! Custom script domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A practice script owned by the user.
///
/// Scripts live exclusively in the local store: created by the user or
/// seeded from the default template set on first use, editable in place by
/// id, and deletable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomScript {
    /// Unique script identifier
    pub id: Uuid,
    /// Short display title
    pub title: String,
    /// The text the user reads from
    pub text: String,
    /// When the script was created
    pub created_at: DateTime<Utc>,
}

impl CustomScript {
    /// Creates a script with a fresh id and creation timestamp.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = CustomScript::new("One", "text");
        let b = CustomScript::new("Two", "text");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_json_round_trip() {
        let script = CustomScript::new("Morning warm-up", "Today I will speak clearly.");
        let json = serde_json::to_string(&script).unwrap();
        assert!(json.contains("createdAt"));

        let back: CustomScript = serde_json::from_str(&json).unwrap();
        assert_eq!(back, script);
    }
}
