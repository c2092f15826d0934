/// Application settings
///
/// Settings are read once at startup from `settings.json` in the user's
/// config directory:
/// - Linux: ~/.config/blur-check/settings.json
/// - macOS: ~/Library/Application Support/blur-check/settings.json
/// - Windows: %APPDATA%\blur-check\settings.json
///
/// The file is optional and never written back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Default analysis endpoint (the analysis service's local dev address)
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/analyze";

/// Longest edge of the on-screen preview, in pixels
pub const DEFAULT_PREVIEW_MAX_EDGE: u32 = 480;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Full URL that receives `POST` requests
    pub endpoint: String,
    /// Previews are downscaled so neither side exceeds this
    pub preview_max_edge: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            preview_max_edge: DEFAULT_PREVIEW_MAX_EDGE,
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`. A missing file is not an error; anything else
    /// unexpected is logged and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(settings) => {
                info!(path = %path.display(), endpoint = %settings.endpoint, "settings loaded");
                settings
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring settings file");
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        // A zero edge would collapse every preview to nothing
        if settings.preview_max_edge == 0 {
            settings.preview_max_edge = DEFAULT_PREVIEW_MAX_EDGE;
        }
        Ok(settings)
    }

    fn settings_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("blur-check");
        path.push("settings.json");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint, "http://127.0.0.1:5000/api/analyze");
        assert_eq!(settings.preview_max_edge, DEFAULT_PREVIEW_MAX_EDGE);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let settings = Settings::from_json(r#"{"endpoint": "https://example.test/api/analyze"}"#)
            .unwrap();
        assert_eq!(settings.endpoint, "https://example.test/api/analyze");
        assert_eq!(settings.preview_max_edge, DEFAULT_PREVIEW_MAX_EDGE);
    }

    #[test]
    fn test_zero_preview_edge_is_replaced() {
        let settings = Settings::from_json(r#"{"preview_max_edge": 0}"#).unwrap();
        assert_eq!(settings.preview_max_edge, DEFAULT_PREVIEW_MAX_EDGE);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ endpoint: nope"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("blur-check-missing-settings.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let path = std::env::temp_dir().join(format!(
            "blur-check-bad-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(Settings::load_or_default(&path), Settings::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_is_read() {
        let path = std::env::temp_dir().join(format!(
            "blur-check-good-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"endpoint": "http://10.0.0.2:8080/api/analyze", "preview_max_edge": 256}"#)
            .unwrap();
        let settings = Settings::load_or_default(&path);
        assert_eq!(settings.endpoint, "http://10.0.0.2:8080/api/analyze");
        assert_eq!(settings.preview_max_edge, 256);
        let _ = std::fs::remove_file(&path);
    }
}
