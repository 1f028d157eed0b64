//! Error types for the Drape garment pipeline.
//!
//! Errors are organized by layer so callers can tell a bad input photo apart
//! from a missing model or a single garment that could not be described.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Drape operations.
#[derive(Error, Debug)]
pub enum DrapeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline processing errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input bytes could not be interpreted as an image
    #[error("Image decode error: {message}")]
    ImageDecode { message: String },

    /// Input bytes carry a format we do not accept
    #[error("Unsupported image format: {format}")]
    UnsupportedFormat { format: String },

    /// Input exceeds the configured byte limit
    #[error("Input too large: {size_mb}MB > {max_mb}MB")]
    InputTooLarge { size_mb: u64, max_mb: u64 },

    /// Decoded image exceeds the configured dimension limit
    #[error("Image too large: {width}x{height} > {max_dim}")]
    ImageTooLarge {
        width: u32,
        height: u32,
        max_dim: u32,
    },

    /// A required model artifact is missing or failed to load
    #[error("Model unavailable at {path}: {message}")]
    ModelUnavailable { path: PathBuf, message: String },

    /// A forward pass failed or produced an unexpected tensor
    #[error("Inference failed in {stage} stage: {message}")]
    Inference { stage: String, message: String },

    /// Normalization was requested for a channel count without parameters
    #[error("Unsupported channel count {channels}: normalization exists for 1, 3 and 18 channels")]
    UnsupportedChannels { channels: usize },

    /// No pixels survived the alpha filter, so colors cannot be clustered
    #[error("Color detection failed: {message}")]
    ColorDetection { message: String },

    /// Re-encoding an isolated garment failed
    #[error("Encode error: {message}")]
    Encode { message: String },
}

impl PipelineError {
    pub(crate) fn inference(stage: &str, message: impl Into<String>) -> Self {
        Self::Inference {
            stage: stage.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn model_unavailable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Convenience type alias for Drape results.
pub type Result<T> = std::result::Result<T, DrapeError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
