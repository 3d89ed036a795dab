//! Custom script domain module.
//!
//! # Module Structure
//!
//! - `model`: The `CustomScript` entity
//! - `defaults`: The fixed template set used to seed an empty library
//! - `repository`: Repository trait for the local script library

mod defaults;
mod model;
mod repository;

// Re-export public API
pub use defaults::{DEFAULT_SCRIPTS, default_scripts};
pub use model::CustomScript;
pub use repository::ScriptRepository;
