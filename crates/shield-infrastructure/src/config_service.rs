//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the application
//! configuration from the configuration file
//! (`~/.config/cringe-shield/config.toml`).

use std::fs;
use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use shield_core::config::AppConfig;

use crate::paths::ShieldPaths;

/// Configuration service that loads and caches the application
/// configuration.
///
/// The configuration is read from config.toml and cached to avoid repeated
/// file I/O operations. A missing file yields the defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a new ConfigService.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> AppConfig {
        // Check if already cached
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = Self::load_config().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            AppConfig::default()
        });

        // Cache it
        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    /// Loads AppConfig from the config file. A missing file is not an
    /// error; it yields the defaults.
    fn load_config() -> Result<AppConfig> {
        let config_path = ShieldPaths::config_file()
            .map_err(|e| anyhow::anyhow!("Failed to resolve config path: {}", e))?;

        if !config_path.exists() {
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_round_trip() {
        let service = ConfigService::new();
        let first = service.get_config();
        let second = service.get_config();
        assert_eq!(first, second);

        service.invalidate_cache();
        let third = service.get_config();
        assert_eq!(first, third);
    }
}
