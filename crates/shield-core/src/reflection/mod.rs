//! Self-reflection domain module.
//!
//! # Module Structure
//!
//! - `model`: The `SelfReflection` entry
//! - `repository`: Repository trait for the local reflection log

mod model;
mod repository;

// Re-export public API
pub use model::{MAX_RATING, MIN_RATING, SelfReflection};
pub use repository::ReflectionRepository;
