//! Configuration structures for the extraction engine.

use serde::{Deserialize, Serialize};

use crate::error::{ExpiryError, Result};

/// Main configuration for the expiry pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpiryConfig {
    /// Date extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Date extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// When a numeric substring matches but is not a valid calendar
    /// date under either year interpretation, continue to month-name
    /// matching instead of returning not-found.
    pub numeric_fallthrough: bool,

    /// Base century added to two-digit years (25 -> 2025).
    pub century_base: i32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            numeric_fallthrough: true,
            century_base: 2000,
        }
    }
}

impl ExpiryConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ExpiryError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ExpiryError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExpiryConfig::default();
        assert!(config.extraction.numeric_fallthrough);
        assert_eq!(config.extraction.century_base, 2000);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let json = r#"{"extraction": {"numeric_fallthrough": false}}"#;
        let config: ExpiryConfig = serde_json::from_str(json).unwrap();
        assert!(!config.extraction.numeric_fallthrough);
        assert_eq!(config.extraction.century_base, 2000);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ExpiryConfig::default();
        config.extraction.numeric_fallthrough = false;
        config.save(&path).unwrap();

        let loaded = ExpiryConfig::from_file(&path).unwrap();
        assert!(!loaded.extraction.numeric_fallthrough);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = ExpiryConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ExpiryError::Config(_)));
    }
}
