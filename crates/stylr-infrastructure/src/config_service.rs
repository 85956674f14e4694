//! Configuration service implementation.
//!
//! Loads [`StylrConfig`] from `~/.config/stylr/config.toml` (or an explicit
//! path) and caches it. A missing file means defaults; a malformed one is
//! an error for [`ConfigService::load`] and a logged fallback for
//! [`ConfigService::get_config`].

use crate::paths::StylrPaths;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use stylr_core::config::StylrConfig;

/// Configuration service that loads and caches the responder configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit file location; the platform default when `None`.
    path: Option<PathBuf>,
    config: Arc<RwLock<Option<StylrConfig>>>,
}

impl ConfigService {
    /// Uses the platform config file. Nothing is read until first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Uses `path` instead of the platform config file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading it if not cached.
    ///
    /// Load failures are logged and replaced by the defaults.
    pub fn get_config(&self) -> StylrConfig {
        {
            let cached = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(config) = cached.as_ref() {
                return config.clone();
            }
        }

        let loaded = self.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Failed to load config, using defaults");
            StylrConfig::default()
        });

        let mut cache = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cache = Some(loaded.clone());
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut cache = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cache = None;
    }

    /// Reads the configuration file without touching the cache.
    pub fn load(&self) -> Result<StylrConfig> {
        let path = self.config_path()?;
        load_from(&path)
    }

    /// Writes `config` to the configuration file and caches it.
    pub fn save(&self, config: &StylrConfig) -> Result<()> {
        let path = self.config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "Config saved");

        let mut cache = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cache = Some(config.clone());
        Ok(())
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(StylrPaths::config_file()?),
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

fn load_from(path: &Path) -> Result<StylrConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(StylrConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::with_path(dir.path().join("config.toml"));
        assert_eq!(service.load().unwrap(), StylrConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pacing\nreply_delay_ms = ").unwrap();

        let service = ConfigService::with_path(&path);
        let err = service.load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
        assert_eq!(service.get_config(), StylrConfig::default());
    }
}
