//! Builds the full metadata record for one isolated garment.

use std::borrow::Cow;
use std::time::Instant;

use image::{DynamicImage, RgbaImage};

use crate::color::ColorExtractor;
use crate::error::PipelineResult;
use crate::types::MetadataRecord;

use super::classifier::AttributeClassifier;
use super::taxonomy::{self, as_strs, AttributeTaxonomy, TOPS_LABEL};

/// Runs the classifier over every taxonomy category plus color extraction.
pub struct AttributeAggregator {
    classifier: AttributeClassifier,
    colors: ColorExtractor,
    taxonomy: AttributeTaxonomy,
}

impl AttributeAggregator {
    pub fn new(
        classifier: AttributeClassifier,
        colors: ColorExtractor,
        taxonomy: AttributeTaxonomy,
    ) -> Self {
        Self {
            classifier,
            colors,
            taxonomy,
        }
    }

    pub fn taxonomy(&self) -> &AttributeTaxonomy {
        &self.taxonomy
    }

    fn classify(&self, image: &DynamicImage, list: &[String]) -> PipelineResult<Vec<String>> {
        self.classifier.classify(image, &as_strs(list))
    }

    /// Describe an isolated garment.
    ///
    /// The `types` list and the conditional keys follow the category decision:
    /// tops-specific candidates are used iff `"tops"` was accepted, otherwise
    /// the bottoms-specific ones.
    pub fn describe(&self, image: &DynamicImage) -> PipelineResult<MetadataRecord> {
        let start = Instant::now();
        let t = &self.taxonomy;
        let mut record = MetadataRecord::new();

        record.insert(taxonomy::KEY_SEASONS, self.classify(image, &t.seasons)?);
        record.insert(taxonomy::KEY_OCCASIONS, self.classify(image, &t.occasions)?);

        let categories = self.classify(image, &t.categories)?;
        let is_tops = categories.iter().any(|c| c == TOPS_LABEL);
        record.insert(taxonomy::KEY_CATEGORIES, categories);

        let types = if is_tops {
            &t.tops_types
        } else {
            &t.bottoms_types
        };
        record.insert(taxonomy::KEY_TYPES, self.classify(image, types)?);

        let rgba: Cow<'_, RgbaImage> = match image.as_rgba8() {
            Some(rgba) => Cow::Borrowed(rgba),
            None => Cow::Owned(image.to_rgba8()),
        };
        record.insert(taxonomy::KEY_COLORS, self.colors.extract_names(&rgba)?);

        record.insert(taxonomy::KEY_STYLES, self.classify(image, &t.styles)?);
        record.insert(taxonomy::KEY_FITS, self.classify(image, &t.fits)?);

        if is_tops {
            record.insert(taxonomy::KEY_NECKLINES, self.classify(image, &t.necklines)?);
            record.insert(taxonomy::KEY_SLEEVES, self.classify(image, &t.sleeves)?);
            record.insert(
                taxonomy::KEY_CLOTHING_LENGTHS,
                self.classify(image, &t.tops_lengths)?,
            );
        } else {
            record.insert(
                taxonomy::KEY_WAIST_STYLES,
                self.classify(image, &t.waist_styles)?,
            );
            record.insert(
                taxonomy::KEY_CLOTHING_LENGTHS,
                self.classify(image, &t.bottoms_lengths)?,
            );
        }

        tracing::debug!(
            "Described garment as {} in {:?}",
            if is_tops { "top" } else { "bottom" },
            start.elapsed()
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::attributes::classifier::testing::FixedLogits;
    use crate::config::ColorConfig;
    use crate::error::PipelineError;
    use image::Rgba;

    fn garment() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(20, 20, |x, _| {
            if x < 10 {
                Rgba([220, 20, 60, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        }))
    }

    fn aggregator(pairs: &[(&str, f32)]) -> AttributeAggregator {
        let classifier = AttributeClassifier::new(Arc::new(FixedLogits::new(pairs)), 0.5);
        AttributeAggregator::new(
            classifier,
            ColorExtractor::new(&ColorConfig::default()),
            AttributeTaxonomy::default(),
        )
    }

    #[test]
    fn test_tops_branch() {
        let agg = aggregator(&[("tops", 4.0), ("hoodies", 6.0), ("long sleeve", 5.0)]);
        let record = agg.describe(&garment()).unwrap();

        assert!(record.covers(AttributeTaxonomy::keys_for(true)));
        assert_eq!(record.len(), 10);
        assert_eq!(record.get("categories").unwrap(), ["tops"]);
        assert_eq!(record.get("types").unwrap(), ["hoodies"]);
        assert_eq!(record.get("sleeves").unwrap(), ["long sleeve"]);
        assert!(record.get("waist_styles").is_none());
        assert_eq!(record.get("colors").unwrap().len(), 3);
        assert!(record.contains("colors", "crimson"));
    }

    #[test]
    fn test_bottoms_branch_when_tops_rejected() {
        let agg = aggregator(&[("bottoms", 4.0), ("jeans", 6.0), ("high-waisted", 5.0)]);
        let record = agg.describe(&garment()).unwrap();

        assert!(record.covers(AttributeTaxonomy::keys_for(false)));
        assert_eq!(record.len(), 9);
        assert_eq!(record.get("types").unwrap(), ["jeans"]);
        assert_eq!(record.get("waist_styles").unwrap(), ["high-waisted"]);
        assert!(record.get("necklines").is_none());
        assert!(record.get("sleeves").is_none());
    }

    #[test]
    fn test_both_categories_accepted_takes_tops_branch() {
        // Equal logits put both categories at exactly 0.5.
        let agg = aggregator(&[]);
        let record = agg.describe(&garment()).unwrap();
        assert_eq!(record.get("categories").unwrap(), ["tops", "bottoms"]);
        assert!(record.covers(AttributeTaxonomy::keys_for(true)));
        assert!(record.get("waist_styles").is_none());
    }

    #[test]
    fn test_empty_lists_are_kept() {
        let agg = aggregator(&[("tops", 4.0)]);
        let record = agg.describe(&garment()).unwrap();
        assert_eq!(record.get("fits").unwrap(), &[] as &[String]);
        assert_eq!(record.get("seasons").unwrap(), &[] as &[String]);
    }

    #[test]
    fn test_transparent_garment_fails_color_detection() {
        let agg = aggregator(&[("tops", 4.0)]);
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0])));
        let err = agg.describe(&img).unwrap_err();
        assert!(matches!(err, PipelineError::ColorDetection { .. }));
    }
}
