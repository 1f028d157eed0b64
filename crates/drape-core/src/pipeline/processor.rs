//! Pipeline orchestration: photo in, isolated and described garments out.

use std::sync::Arc;
use std::time::Instant;

use image::{DynamicImage, RgbImage};
use uuid::Uuid;

use crate::attributes::{AttributeAggregator, AttributeClassifier, AttributeTaxonomy};
use crate::color::ColorExtractor;
use crate::config::Config;
use crate::error::{PipelineResult, Result};
use crate::models::LoadedModels;
use crate::types::{ClassMask, GarmentFailure, GarmentRegion, SegmentationReport};

use super::decode::{format_to_string, ImageDecoder};
use super::encode::{encode_jpeg, garment_filename, IMAGE_EXTENSION};
use super::matting::MaskIsolator;
use super::validate::Validator;

/// Runs segmentation, isolation, description and encoding for one photo at a time.
///
/// Holds only shared read-only state, so one instance can serve many
/// concurrent invocations.
pub struct GarmentPipeline {
    validator: Validator,
    decoder: ImageDecoder,
    models: Arc<LoadedModels>,
    aggregator: AttributeAggregator,
    jpeg_quality: u8,
}

impl GarmentPipeline {
    /// Build a pipeline over already-loaded models.
    ///
    /// Fails only if a configured taxonomy file cannot be read or is invalid.
    pub fn new(config: &Config, models: Arc<LoadedModels>) -> Result<Self> {
        let taxonomy = AttributeTaxonomy::resolve(config.taxonomy_file().as_deref())?;
        let classifier = AttributeClassifier::new(models.scorer(), config.classifier.threshold);
        let aggregator =
            AttributeAggregator::new(classifier, ColorExtractor::new(&config.color), taxonomy);

        Ok(Self {
            validator: Validator::new(config.limits.clone()),
            decoder: ImageDecoder::new(config.limits.clone()),
            models,
            aggregator,
            jpeg_quality: config.output.jpeg_quality,
        })
    }

    /// Validate, decode and process raw photo bytes under a fresh request id.
    pub fn process_bytes(&self, bytes: &[u8]) -> PipelineResult<SegmentationReport> {
        let start = Instant::now();
        self.validator.validate(bytes)?;
        let decoded = self.decoder.decode(bytes)?;
        tracing::trace!(
            "  Decode ({}): {:?}",
            format_to_string(decoded.format),
            start.elapsed()
        );

        let request_id = Uuid::new_v4().to_string();
        self.process_image(&decoded.image, &request_id)
    }

    /// Segment a decoded photo and produce one garment per detected class.
    ///
    /// Garments are processed in ascending class id order. A failure inside
    /// one garment is recorded in `failures` and does not stop its siblings;
    /// failures before the per-garment stage abort the whole invocation.
    pub fn process_image(
        &self,
        image: &DynamicImage,
        request_id: &str,
    ) -> PipelineResult<SegmentationReport> {
        let start = Instant::now();
        tracing::debug!("Processing request {}", request_id);

        let masks = self.models.segmentation().segment(image)?;
        tracing::trace!("  Segment: {:?} ({} classes)", start.elapsed(), masks.len());

        let photo = image.to_rgb8();
        let mut garments = Vec::with_capacity(masks.len());
        let mut failures = Vec::new();

        for (class_id, mask) in &masks {
            match self.process_garment(&photo, *class_id, mask, request_id) {
                Ok(garment) => garments.push(garment),
                Err(error) => {
                    tracing::warn!("Garment class {} in {} failed: {}", class_id, request_id, error);
                    failures.push(GarmentFailure {
                        class_id: *class_id,
                        error,
                    });
                }
            }
        }

        tracing::debug!(
            "Request {} produced {} garments ({} failed) in {:?}",
            request_id,
            garments.len(),
            failures.len(),
            start.elapsed()
        );

        Ok(SegmentationReport {
            request_id: request_id.to_string(),
            width: photo.width(),
            height: photo.height(),
            garments,
            failures,
        })
    }

    fn process_garment(
        &self,
        photo: &RgbImage,
        class_id: u8,
        mask: &ClassMask,
        request_id: &str,
    ) -> PipelineResult<GarmentRegion> {
        let step = Instant::now();
        let isolated = DynamicImage::ImageRgba8(MaskIsolator::isolate(photo, mask)?);
        tracing::trace!("  Isolate class {}: {:?}", class_id, step.elapsed());

        let step = Instant::now();
        let metadata = self.aggregator.describe(&isolated)?;
        tracing::trace!("  Describe class {}: {:?}", class_id, step.elapsed());

        let image = isolated.into_rgba8();
        let encoded = encode_jpeg(&image, self.jpeg_quality)?;

        Ok(GarmentRegion {
            class_id,
            filename: garment_filename(class_id, request_id, IMAGE_EXTENSION),
            pixel_count: MaskIsolator::opaque_pixels(&image),
            image,
            encoded,
            metadata,
        })
    }
}
