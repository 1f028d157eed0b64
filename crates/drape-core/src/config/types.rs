//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory where models are stored
    pub model_dir: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("~/.drape/models"),
        }
    }
}

/// Processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Number of photos processed concurrently, each as its own invocation
    pub parallel_workers: usize,

    /// Extensions picked up when a directory is given as input
    pub supported_formats: Vec<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            parallel_workers: 4,
            supported_formats: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
                "webp".to_string(),
                "bmp".to_string(),
                "gif".to_string(),
                "tiff".to_string(),
            ],
        }
    }
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum input size in megabytes
    pub max_file_size_mb: u64,

    /// Maximum image dimension (width or height)
    pub max_image_dimension: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 50,
            max_image_dimension: 10000,
        }
    }
}

/// Segmentation network settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Weights file name, relative to the model directory
    pub model_file: String,

    /// Square working resolution the network was trained on
    pub input_size: u32,

    /// Per-channel normalization mean (applied to [0, 1] pixel values)
    pub norm_mean: f32,

    /// Per-channel normalization standard deviation
    pub norm_std: f32,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            model_file: "cloth_segm.onnx".to_string(),
            input_size: 768,
            norm_mean: 0.5,
            norm_std: 0.5,
        }
    }
}

/// Zero-shot classifier settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Directory (under the model directory) with `onnx/model.onnx` and `tokenizer.json`
    pub model_dir_name: String,

    /// CLIP pixel input size
    pub image_size: u32,

    /// A label is accepted when its softmax probability is at least this value.
    /// One threshold applies to every classification call of a run.
    pub threshold: f32,

    /// Token sequences longer than this are truncated
    pub max_text_length: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_dir_name: "fashion-clip".to_string(),
            image_size: 224,
            threshold: 0.5,
            max_text_length: 77,
        }
    }
}

/// Dominant color extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Number of dominant colors (k)
    pub num_colors: usize,

    /// Pixels qualify when alpha is strictly greater than this
    pub alpha_threshold: u8,

    /// Seed for k-means initialization
    pub seed: u64,

    /// Lloyd iteration cap
    pub max_iterations: usize,

    /// Convergence tolerance, relative to the mean per-channel variance
    pub tolerance: f64,

    /// Independent seeded restarts; the lowest-inertia run wins
    pub n_init: usize,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            num_colors: 3,
            alpha_threshold: 200,
            seed: 42,
            max_iterations: 300,
            tolerance: 1e-4,
            n_init: 1,
        }
    }
}

/// Attribute taxonomy settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Optional TOML file replacing the built-in taxonomy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Lossy re-encode quality for isolated garments (1-100)
    pub jpeg_quality: u8,

    /// Summary format ("json" or "jsonl")
    pub format: String,

    /// Pretty-print JSON summaries
    pub pretty: bool,

    /// Embed base64 garment images in summaries
    pub include_image_data: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: 90,
            format: "json".to_string(),
            pretty: false,
            include_image_data: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
