//! Unified path management for CringeShield files.
//!
//! All configuration and locally stored user artifacts live under the
//! platform config directory, so the store, the config file, and any
//! future additions stay in one place.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for CringeShield.
///
/// # Directory Structure
///
/// ```text
/// <config_dir>/cringe-shield/      # e.g. ~/.config/cringe-shield/
/// ├── config.toml                  # Application configuration
/// └── store/                       # Local key-value store
///     ├── custom-scripts.json
///     └── cringe-shield-self-reflections.json
/// ```
pub struct ShieldPaths;

impl ShieldPaths {
    /// Returns the CringeShield configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("cringe-shield"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path of the application config file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory backing the local key-value store.
    pub fn store_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("store"))
    }
}
