//! Path management for bizbook
//!
//! Provides XDG-compliant path resolution for settings and the preference file.
//!
//! ## Path Resolution Order
//!
//! 1. `BIZBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/bizbook` or `~/.config/bizbook`
//! 3. Windows: `%APPDATA%\bizbook`

use std::path::PathBuf;

use crate::error::BizbookError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BIZBOOK_DATA_DIR";

/// Manages all paths used by bizbook
#[derive(Debug, Clone)]
pub struct BizbookPaths {
    /// Base directory for all bizbook data
    base_dir: PathBuf,
}

impl BizbookPaths {
    /// Create a new BizbookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BizbookError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BizbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/bizbook/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the preference store file
    pub fn preferences_file(&self) -> PathBuf {
        self.base_dir.join("preferences.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BizbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BizbookError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BizbookError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                BizbookError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("bizbook"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BizbookError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BizbookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("bizbook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BizbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.preferences_file(),
            temp_dir.path().join("preferences.json")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = BizbookPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BizbookPaths::with_base_dir(temp_dir.path().join("nested").join("bizbook"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
