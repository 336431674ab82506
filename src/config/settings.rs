//! User settings for Fatora
//!
//! A small settings file: the currency label used when printing amounts and
//! any custom item names the user wants offered alongside the built-in
//! catalog.

use serde::{Deserialize, Serialize};

use super::paths::FatoraPaths;
use crate::error::FatoraError;
use crate::suggest::Catalog;

/// User settings for Fatora
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency label appended to printed amounts
    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    /// Extra item names offered by the suggestion dropdown, after the
    /// built-in catalog
    #[serde(default)]
    pub custom_items: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_label() -> String {
    "جنيه".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_label: default_currency_label(),
            custom_items: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist
    pub fn load_or_create(paths: &FatoraPaths) -> Result<Self, FatoraError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FatoraError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FatoraError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FatoraPaths) -> Result<(), FatoraError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FatoraError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FatoraError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The effective suggestion catalog: built-ins plus custom items
    pub fn catalog(&self) -> Catalog {
        Catalog::with_custom_items(&self.custom_items)
    }
}
