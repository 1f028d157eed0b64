//! Configuration management for Drape.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. Every section implements `Default`, so a missing file or a
//! partial file both produce a complete configuration.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Drape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Concurrency and discovery settings (used by the CLI)
    pub processing: ProcessingConfig,

    /// Resource limits
    pub limits: LimitsConfig,

    /// Segmentation network settings
    pub segmentation: SegmentationConfig,

    /// Zero-shot classifier settings
    pub classifier: ClassifierConfig,

    /// Dominant color extraction settings
    pub color: ColorConfig,

    /// Attribute taxonomy override
    pub taxonomy: TaxonomyConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.drape.drape/config.toml
    /// - Linux: ~/.config/drape/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\drape\config\config.toml
    ///
    /// Falls back to ~/.drape/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "drape", "drape")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".drape").join("config.toml")
            })
    }

    /// Get the resolved model directory path (with ~ expansion).
    pub fn model_dir(&self) -> PathBuf {
        let path_str = self.general.model_dir.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.into_owned())
    }

    /// Path of the segmentation network weights.
    pub fn segmentation_model_path(&self) -> PathBuf {
        self.model_dir().join(&self.segmentation.model_file)
    }

    /// Directory holding the zero-shot classifier model and tokenizer.
    pub fn classifier_dir(&self) -> PathBuf {
        self.model_dir().join(&self.classifier.model_dir_name)
    }

    /// Resolved taxonomy override file, if one is configured.
    pub fn taxonomy_file(&self) -> Option<PathBuf> {
        self.taxonomy
            .file
            .as_deref()
            .map(|f| PathBuf::from(shellexpand::tilde(f).into_owned()))
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.processing.parallel_workers, 4);
        assert_eq!(config.segmentation.input_size, 768);
        assert_eq!(config.classifier.threshold, 0.5);
        assert_eq!(config.color.num_colors, 3);
        assert_eq!(config.color.alpha_threshold, 200);
        assert_eq!(config.color.seed, 42);
        assert_eq!(config.output.jpeg_quality, 90);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[general]"));
        assert!(toml.contains("[segmentation]"));
        assert!(toml.contains("[color]"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [classifier]
            threshold = 0.35

            [color]
            num_colors = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.classifier.threshold, 0.35);
        assert_eq!(config.color.num_colors, 5);
        assert_eq!(config.color.seed, 42);
        assert_eq!(config.segmentation.model_file, "cloth_segm.onnx");
    }

    #[test]
    fn test_invalid_toml_is_rejected_by_validation() {
        let err = Config::from_toml_str("[color]\nnum_colors = 0\n").unwrap_err();
        assert!(err.to_string().contains("num_colors"));
    }

    #[test]
    fn test_model_paths_are_under_model_dir() {
        let mut config = Config::default();
        config.general.model_dir = PathBuf::from("/opt/drape/models");
        assert_eq!(
            config.segmentation_model_path(),
            PathBuf::from("/opt/drape/models/cloth_segm.onnx")
        );
        assert_eq!(
            config.classifier_dir(),
            PathBuf::from("/opt/drape/models/fashion-clip")
        );
    }

    #[test]
    fn test_taxonomy_file_unset_by_default() {
        assert!(Config::default().taxonomy_file().is_none());
    }
}
