//! Path management for Fatora
//!
//! Resolves where settings live on disk.
//!
//! ## Path Resolution Order
//!
//! 1. `FATORA_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory via the `directories` crate
//!    (Linux: `$XDG_CONFIG_HOME/fatora` or `~/.config/fatora`,
//!    macOS: `~/Library/Application Support/fatora`,
//!    Windows: `%APPDATA%\fatora`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FatoraError;

/// Manages all paths used by Fatora
#[derive(Debug, Clone)]
pub struct FatoraPaths {
    /// Base directory for all Fatora configuration
    base_dir: PathBuf,
}

impl FatoraPaths {
    /// Create a new FatoraPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FatoraError> {
        let base_dir = if let Ok(custom) = std::env::var("FATORA_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "fatora")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    FatoraError::Config("Could not determine a config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create FatoraPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), FatoraError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FatoraError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FatoraPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(paths.base_dir(), &temp_dir.path().to_path_buf());
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("settings.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FatoraPaths::with_base_dir(temp_dir.path().join("nested").join("config"));
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
