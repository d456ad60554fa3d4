//! Engine configuration
//!
//! Loaded from a JSON file; every field is optional and falls back to its
//! default. `~/.dreamforge/config.json` is read when no explicit path is given.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DreamError, DreamResult};

/// Default simulated latency of the content step
pub const DEFAULT_CONTENT_DELAY_MS: u64 = 3000;
/// Default simulated latency of the image step
pub const DEFAULT_IMAGE_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Simulated delay before content is assembled (milliseconds)
    pub content_delay_ms: u64,
    /// Simulated delay of the image step (milliseconds)
    pub image_delay_ms: u64,
    /// Target width for generated inspiration images
    pub image_width: u32,
    /// Target height for generated inspiration images
    pub image_height: u32,
    /// Appended to every image prompt
    pub prompt_suffix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            content_delay_ms: DEFAULT_CONTENT_DELAY_MS,
            image_delay_ms: DEFAULT_IMAGE_DELAY_MS,
            image_width: 1024,
            image_height: 576,
            prompt_suffix: "game concept art, high quality, detailed".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn content_delay(&self) -> Duration {
        Duration::from_millis(self.content_delay_ms)
    }

    pub fn image_delay(&self) -> Duration {
        Duration::from_millis(self.image_delay_ms)
    }

    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> DreamResult<Self> {
        serde_json::from_str(json).map_err(|e| DreamError::Config(e.to_string()))
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> DreamResult<Self> {
        let path = path.as_ref();
        debug!(?path, "Loading engine config");
        let json = std::fs::read_to_string(path)
            .map_err(|e| DreamError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Load `path` if given, else the default config file if it exists,
    /// else defaults.
    pub fn load_or_default(path: Option<&Path>) -> DreamResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}

/// Get the default config file path (~/.dreamforge/config.json)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".dreamforge").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.content_delay(), Duration::from_secs(3));
        assert_eq!(config.image_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{"content_delay_ms": 0}"#).unwrap();
        assert_eq!(config.content_delay_ms, 0);
        assert_eq!(config.image_width, 1024);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = EngineConfig::from_json("{").unwrap_err();
        assert!(matches!(err, DreamError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"image_width": 512, "image_height": 512}"#).unwrap();

        let config = EngineConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.image_width, 512);
        assert_eq!(config.image_height, 512);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DreamError::Config(_)));
    }
}
