//! User settings for bizbook
//!
//! Application preferences that live outside the preference store: the
//! diagnostic log level and the business name shown in headers.

use serde::{Deserialize, Serialize};

use super::paths::BizbookPaths;
use crate::error::BizbookError;

/// User settings for bizbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Log filter used when `RUST_LOG` is not set (e.g. "warn", "bizbook=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Business name displayed in the status header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_level: default_log_level(),
            business_name: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BizbookPaths) -> Result<Self, BizbookError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BizbookError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BizbookError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BizbookPaths) -> Result<(), BizbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BizbookError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BizbookError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Header line for status output
    pub fn display_name(&self) -> &str {
        self.business_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("My Business")
    }
}
