//! Practice session domain module.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`, `SessionMode`)
//! - `repository`: API trait for fetching recorded sessions
//!
//! # Usage
//!
//! ```ignore
//! use shield_core::session::{Session, SessionApi, SessionMode};
//! ```

mod model;
mod repository;

// Re-export public API
pub use model::{Session, SessionMode};
pub use repository::SessionApi;
