//! 30-day challenge domain module.
//!
//! # Module Structure
//!
//! - `model`: Progress entries and the derived completed-day set
//! - `repository`: API trait for the challenge-progress endpoints

mod model;
mod repository;

// Re-export public API
pub use model::{ChallengeProgress, ChallengeProgressEntry, TOTAL_DAYS};
pub use repository::ChallengeApi;
