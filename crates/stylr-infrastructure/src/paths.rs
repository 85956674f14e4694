//! Path management for STYLR configuration files.
//!
//! ```text
//! ~/.config/stylr/        # Config directory (platform specific)
//! ├── config.toml         # Responder configuration
//! └── logs/               # Log files
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "stylr";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct StylrPaths;

impl StylrPaths {
    /// Returns the STYLR configuration directory (e.g. `~/.config/stylr/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_under_config_dir() {
        let Ok(config_dir) = StylrPaths::config_dir() else {
            // No home directory in this environment
            return;
        };
        assert!(config_dir.ends_with("stylr"));

        let config_file = StylrPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        assert!(config_file.starts_with(&config_dir));
        assert!(StylrPaths::logs_dir().unwrap().starts_with(&config_dir));
    }
}
