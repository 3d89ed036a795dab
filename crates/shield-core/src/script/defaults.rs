//! Default script templates.

use crate::script::model::CustomScript;

/// The fixed template set seeded into an empty script library.
///
/// Ids and timestamps are assigned at seed time, not here.
pub const DEFAULT_SCRIPTS: [(&str, &str); 4] = [
    (
        "Introduce Yourself",
        "Hi, I'm practicing how I introduce myself. I'd like to share a little \
         about who I am, what I do, and one thing I'm working on right now.",
    ),
    (
        "Describe Your Day",
        "Let me walk through my day from the beginning. I'll describe what \
         happened, how it felt, and one moment that stood out.",
    ),
    (
        "Tell a Short Story",
        "I want to tell a short story about something that happened to me. \
         It has a beginning, a turning point, and an ending I learned from.",
    ),
    (
        "Share an Opinion",
        "Here's something I have an opinion about. I'll state my view, give \
         two reasons I hold it, and mention one thing that could change my mind.",
    ),
];

/// Builds the default scripts, assigning each a fresh id and creation
/// timestamp at call time.
pub fn default_scripts() -> Vec<CustomScript> {
    DEFAULT_SCRIPTS
        .iter()
        .map(|(title, text)| CustomScript::new(*title, *text))
        .collect()
}
