//! Configuration management.

use crate::models::Screen;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration for blikcore.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Safe landing screen for back navigation without provenance.
    pub fallback_screen: Screen,
    /// Run the resolver's ambiguity diagnostic on every lookup.
    pub strict_resolution: bool,
    /// External CRUD service settings, when a backend is wired up.
    pub backend: Option<BackendSettings>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fallback_screen: Screen::SharedValueMap,
            strict_resolution: false,
            backend: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file, filling missing fields with
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let file: ConfigFile = toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("cannot parse {}: {e}", path.display())))?;
        Ok(Self::from(file))
    }
}

impl From<ConfigFile> for AppConfig {
    fn from(file: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            fallback_screen: file.fallback_screen.unwrap_or(defaults.fallback_screen),
            strict_resolution: file.strict_resolution.unwrap_or(defaults.strict_resolution),
            backend: file.backend.map(|b| BackendSettings {
                base_url: b.base_url,
                timeout_secs: b.timeout_secs.unwrap_or(10),
            }),
        }
    }
}

/// Settings for the external CRUD service.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    /// Base URL of the service.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Fallback back-navigation screen.
    pub fallback_screen: Option<Screen>,
    /// Strict resolution flag.
    pub strict_resolution: Option<bool>,
    /// Backend section.
    pub backend: Option<ConfigFileBackend>,
}

/// Backend section in the config file.
#[derive(Debug, Deserialize)]
pub struct ConfigFileBackend {
    /// Base URL of the service.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.fallback_screen, Screen::SharedValueMap);
        assert!(!config.strict_resolution);
        assert!(config.backend.is_none());
    }

    #[test]
    fn test_parse_full_file() {
        let file: ConfigFile = toml::from_str(
            r#"
            fallback_screen = "feed"
            strict_resolution = true

            [backend]
            base_url = "https://api.blik.example"
            timeout_secs = 5
            "#,
        )
        .unwrap();
        let config = AppConfig::from(file);
        assert_eq!(config.fallback_screen, Screen::Feed);
        assert!(config.strict_resolution);
        let backend = config.backend.unwrap();
        assert_eq!(backend.base_url, "https://api.blik.example");
        assert_eq!(backend.timeout_secs, 5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file: ConfigFile = toml::from_str("strict_resolution = true").unwrap();
        let config = AppConfig::from(file);
        assert_eq!(config.fallback_screen, Screen::SharedValueMap);
        assert!(config.strict_resolution);
    }

    #[test]
    fn test_backend_timeout_defaults() {
        let file: ConfigFile = toml::from_str(
            r#"
            [backend]
            base_url = "https://api.blik.example"
            "#,
        )
        .unwrap();
        let config = AppConfig::from(file);
        assert_eq!(config.backend.unwrap().timeout_secs, 10);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = AppConfig::from_file("/nonexistent/blik.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
