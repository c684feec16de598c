//! Application configuration
//!
//! Settings are read from a TOML file in the user's config directory:
//! - Linux/macOS: ~/.config/cinehub/config.toml
//! - Windows: %USERPROFILE%/.config/cinehub/config.toml
//!
//! Every key is optional; a missing file means all defaults.
//!
//! ```toml
//! window_title = "CineHub"
//! window_width = 1280.0
//! window_height = 800.0
//! catalog_path = "/home/me/movies.json"
//! page_size = 20
//! ```

use crate::catalog::DEFAULT_PAGE_SIZE;
use crate::error::{CineError, CineResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the directory holding CineHub's files
pub const CONFIG_DIR_NAME: &str = "cinehub";

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Title of the main window
    pub window_title: String,

    /// Initial window width in logical pixels
    pub window_width: f64,

    /// Initial window height in logical pixels
    pub window_height: f64,

    /// Catalog JSON file; the bundled sample is used when unset
    pub catalog_path: Option<PathBuf>,

    /// Number of movies per listing page
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "CineHub".to_string(),
            window_width: 1280.0,
            window_height: 800.0,
            catalog_path: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Default location of the configuration file
    ///
    /// `None` when no absolute home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir()
            .filter(|home| home.is_absolute())
            .map(|home| home.join(".config").join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> CineResult<Self> {
        let config: AppConfig =
            toml::from_str(text).map_err(|e| CineError::config_format(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults if it does not exist
    pub fn load(path: impl AsRef<Path>) -> CineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| CineError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&text)
    }

    /// Load configuration from the default location
    pub fn load_default() -> CineResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> CineResult<()> {
        if self.page_size == 0 {
            return Err(CineError::config_format("page_size must be at least 1"));
        }
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(CineError::config_format("window size must be positive"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.window_title, "CineHub");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_path_is_absolute() {
        if let Some(path) = AppConfig::default_path() {
            assert!(path.is_absolute());
            assert!(path.ends_with(".config/cinehub/config.toml"));
        }
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("page_size = 10\n").unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.window_width, 1280.0);
    }

    #[test]
    fn test_catalog_path() {
        let config = AppConfig::from_toml("catalog_path = \"/tmp/movies.json\"\n").unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/movies.json")));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = AppConfig::from_toml("page_size = 0\n").unwrap_err();
        assert!(matches!(err, CineError::ConfigFormat(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = AppConfig::from_toml("page_size = \"many\"").unwrap_err();
        assert!(matches!(err, CineError::ConfigFormat(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "window_title = \"Movies\"\nwindow_width = 500.0\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.window_title, "Movies");
        assert_eq!(config.window_width, 500.0);
    }
}
