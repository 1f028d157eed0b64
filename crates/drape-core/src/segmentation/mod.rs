//! Garment segmentation.
//!
//! A dense network assigns every pixel of a normalized, fixed-size rendition
//! of the photo to one of a few garment classes. Class 0 is background; every
//! other class that owns at least one pixel becomes a [`ClassMask`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use drape_core::config::Config;
//! use drape_core::segmentation::SegmentationEngine;
//!
//! let config = Config::default();
//! let engine = SegmentationEngine::load(&config.segmentation, &config.model_dir())?;
//! for (class_id, mask) in engine.segment(&photo)? {
//!     println!("class {class_id}: {} px", mask.pixel_count());
//! }
//! ```

pub mod classmap;
pub mod normalize;
pub mod session;

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use image::imageops::FilterType;
use image::DynamicImage;
use ndarray::Array4;

use crate::config::SegmentationConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::types::ClassMask;

pub use classmap::{ClassMap, BACKGROUND_CLASS};
pub use normalize::{image_to_tensor, Normalization};
pub use session::OnnxDenseModel;

/// A forward pass producing per-pixel class scores.
///
/// Implementations take a `[1, C_in, H, W]` normalized tensor and return
/// `[1, C, H, W]` unnormalized scores, one plane per class.
pub trait DenseModel: Send + Sync {
    fn forward(&self, input: &Array4<f32>) -> PipelineResult<Array4<f32>>;
}

/// Color planes fed to the network.
const INPUT_CHANNELS: usize = 3;

/// Engine turning a photo into one mask per detected garment class.
pub struct SegmentationEngine {
    model: Box<dyn DenseModel>,
    input_size: u32,
    norm_mean: f32,
    norm_std: f32,
}

impl SegmentationEngine {
    /// Load the ONNX segmentation network from `{model_dir}/{model_file}`.
    pub fn load(config: &SegmentationConfig, model_dir: &Path) -> PipelineResult<Self> {
        let model_path = model_dir.join(&config.model_file);
        tracing::info!("Loading segmentation model from {:?}", model_path);
        let model = OnnxDenseModel::load(&model_path)?;
        tracing::info!("Segmentation model loaded successfully");
        Ok(Self::with_model(config, Box::new(model)))
    }

    /// Build an engine around an arbitrary forward pass.
    pub fn with_model(config: &SegmentationConfig, model: Box<dyn DenseModel>) -> Self {
        Self {
            model,
            input_size: config.input_size,
            norm_mean: config.norm_mean,
            norm_std: config.norm_std,
        }
    }

    /// Working resolution (square) of the network.
    pub fn input_size(&self) -> u32 {
        self.input_size
    }

    /// Resize, tensorize and normalize a photo for the network.
    pub fn preprocess(&self, image: &DynamicImage) -> PipelineResult<Array4<f32>> {
        let size = self.input_size;
        let mut tensor = if image.width() == size && image.height() == size {
            image_to_tensor(image, INPUT_CHANNELS)?
        } else {
            let resized = image.resize_exact(size, size, FilterType::CatmullRom);
            image_to_tensor(&resized, INPUT_CHANNELS)?
        };

        let norm = Normalization::for_channels(tensor.shape()[1], self.norm_mean, self.norm_std)?;
        norm.apply(&mut tensor)?;
        Ok(tensor)
    }

    /// Run the network and decide one class per working-resolution pixel.
    pub fn class_map(&self, image: &DynamicImage) -> PipelineResult<ClassMap> {
        let start = Instant::now();
        let tensor = self.preprocess(image)?;
        let scores = self.model.forward(&tensor)?;

        let expected = (self.input_size as usize, self.input_size as usize);
        let shape = scores.shape();
        if (shape[2], shape[3]) != expected {
            return Err(PipelineError::inference(
                "segmentation",
                format!(
                    "score map is {}x{}, expected {}x{}",
                    shape[3], shape[2], expected.1, expected.0
                ),
            ));
        }

        let map = ClassMap::from_scores(&scores)?;
        tracing::debug!(
            "Segmented {}x{} photo in {:?}",
            image.width(),
            image.height(),
            start.elapsed()
        );
        Ok(map)
    }

    /// One mask per present foreground class, keyed and ordered by class id.
    ///
    /// Background-only photos yield an empty map.
    pub fn segment(&self, image: &DynamicImage) -> PipelineResult<BTreeMap<u8, ClassMask>> {
        let map = self.class_map(image)?;
        let masks = map.masks();
        for (class_id, mask) in &masks {
            tracing::trace!("class {}: {} px", class_id, mask.pixel_count());
        }
        Ok(masks)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Scores class 1 wherever the normalized red channel is high, else background.
    pub(crate) struct RedIsClassOne {
        pub(crate) classes: usize,
    }

    impl DenseModel for RedIsClassOne {
        fn forward(&self, input: &Array4<f32>) -> PipelineResult<Array4<f32>> {
            let (h, w) = (input.shape()[2], input.shape()[3]);
            let mut scores = Array4::<f32>::zeros((1, self.classes, h, w));
            for y in 0..h {
                for x in 0..w {
                    let winner = if input[[0, 0, y, x]] > 0.5 { 1 } else { 0 };
                    scores[[0, winner, y, x]] = 10.0;
                }
            }
            Ok(scores)
        }
    }

    /// Returns a score map of the wrong resolution.
    pub(crate) struct WrongSize;

    impl DenseModel for WrongSize {
        fn forward(&self, _input: &Array4<f32>) -> PipelineResult<Array4<f32>> {
            Ok(Array4::zeros((1, 4, 3, 3)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use image::{Rgb, RgbImage};

    fn config(input_size: u32) -> SegmentationConfig {
        SegmentationConfig {
            input_size,
            ..SegmentationConfig::default()
        }
    }

    fn red_square(size: u32, from: u32, to: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(size, size, |x, y| {
            if (from..to).contains(&x) && (from..to).contains(&y) {
                Rgb([230, 10, 10])
            } else {
                Rgb([20, 20, 20])
            }
        }))
    }

    #[test]
    fn test_segment_finds_red_region() {
        let engine = SegmentationEngine::with_model(&config(32), Box::new(RedIsClassOne { classes: 4 }));
        let masks = engine.segment(&red_square(32, 8, 16)).unwrap();
        assert_eq!(masks.keys().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(masks[&1].pixel_count(), 64);
        assert!(masks[&1].get(8, 8));
        assert!(!masks[&1].get(16, 16));
    }

    #[test]
    fn test_segment_background_only() {
        let engine = SegmentationEngine::with_model(&config(16), Box::new(RedIsClassOne { classes: 4 }));
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([0, 0, 255])));
        assert!(engine.segment(&img).unwrap().is_empty());
    }

    #[test]
    fn test_masks_live_at_working_resolution() {
        let engine = SegmentationEngine::with_model(&config(24), Box::new(RedIsClassOne { classes: 4 }));
        let masks = engine.segment(&red_square(96, 0, 96)).unwrap();
        let mask = &masks[&1];
        assert_eq!((mask.width(), mask.height()), (24, 24));
        assert_eq!(mask.pixel_count(), 24 * 24);
    }

    #[test]
    fn test_preprocess_shape_and_range() {
        let engine = SegmentationEngine::with_model(&config(20), Box::new(RedIsClassOne { classes: 4 }));
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 30, Rgb([255, 0, 0])));
        let tensor = engine.preprocess(&img).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 20, 20]);
        assert!(tensor.iter().all(|&v| (-1.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_wrong_score_resolution_is_inference_error() {
        let engine = SegmentationEngine::with_model(&config(8), Box::new(WrongSize));
        let img = DynamicImage::ImageRgb8(RgbImage::new(8, 8));
        let err = engine.segment(&img).unwrap_err();
        assert!(matches!(err, PipelineError::Inference { .. }));
    }

    #[test]
    fn test_segment_is_deterministic() {
        let engine = SegmentationEngine::with_model(&config(32), Box::new(RedIsClassOne { classes: 4 }));
        let img = red_square(64, 10, 40);
        assert_eq!(engine.segment(&img).unwrap(), engine.segment(&img).unwrap());
    }

    #[test]
    fn test_load_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        let err = SegmentationEngine::load(&SegmentationConfig::default(), dir.path())
            .err()
            .unwrap();
        assert!(matches!(err, PipelineError::ModelUnavailable { .. }));
    }
}
