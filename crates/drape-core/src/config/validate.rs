//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.parallel_workers == 0 {
            return Err(ConfigError::ValidationError(
                "processing.parallel_workers must be > 0".into(),
            ));
        }
        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if self.segmentation.input_size == 0 {
            return Err(ConfigError::ValidationError(
                "segmentation.input_size must be > 0".into(),
            ));
        }
        if self.segmentation.norm_std <= 0.0 {
            return Err(ConfigError::ValidationError(
                "segmentation.norm_std must be > 0".into(),
            ));
        }
        if self.classifier.image_size == 0 {
            return Err(ConfigError::ValidationError(
                "classifier.image_size must be > 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.classifier.threshold) {
            return Err(ConfigError::ValidationError(
                "classifier.threshold must be between 0.0 and 1.0".into(),
            ));
        }
        if self.color.num_colors == 0 {
            return Err(ConfigError::ValidationError(
                "color.num_colors must be > 0".into(),
            ));
        }
        if self.color.max_iterations == 0 {
            return Err(ConfigError::ValidationError(
                "color.max_iterations must be > 0".into(),
            ));
        }
        if self.color.n_init == 0 {
            return Err(ConfigError::ValidationError(
                "color.n_init must be > 0".into(),
            ));
        }
        if self.color.tolerance < 0.0 {
            return Err(ConfigError::ValidationError(
                "color.tolerance must be >= 0".into(),
            ));
        }
        if !(1..=100).contains(&self.output.jpeg_quality) {
            return Err(ConfigError::ValidationError(
                "output.jpeg_quality must be between 1 and 100".into(),
            ));
        }
        Ok(())
    }
}
