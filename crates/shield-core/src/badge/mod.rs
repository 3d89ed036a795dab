//! Achievement badge domain module.
//!
//! # Module Structure
//!
//! - `model`: The `Badge` type (id, display name, icon, predicate)
//! - `registry`: The static badge registry and `evaluate`

mod model;
mod registry;

// Re-export public API
pub use model::{Badge, BadgePredicate};
pub use registry::{BADGES, earned_names, evaluate};
