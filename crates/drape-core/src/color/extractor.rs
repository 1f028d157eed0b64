//! Dominant color extraction for isolated garments.

use image::RgbaImage;

use crate::config::ColorConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::types::PaletteSample;

use super::kmeans::KMeans;
use super::namer::ColorNamer;

/// Clusters the opaque pixels of a garment into `k` dominant colors and names them.
pub struct ColorExtractor {
    kmeans: KMeans,
    alpha_threshold: u8,
    namer: &'static ColorNamer,
}

impl ColorExtractor {
    /// Create an extractor from configuration, using the shared color namer.
    pub fn new(config: &ColorConfig) -> Self {
        Self {
            kmeans: KMeans::from(config),
            alpha_threshold: config.alpha_threshold,
            namer: ColorNamer::shared(),
        }
    }

    /// Number of colors returned per garment.
    pub fn num_colors(&self) -> usize {
        self.kmeans.k()
    }

    /// RGB values of pixels whose alpha is strictly above the threshold.
    pub fn qualifying_pixels(&self, image: &RgbaImage) -> Vec<[u8; 3]> {
        image
            .pixels()
            .filter(|p| p.0[3] > self.alpha_threshold)
            .map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect()
    }

    /// Extract `k` dominant colors, in cluster order, with their names.
    pub fn extract(&self, image: &RgbaImage) -> PipelineResult<Vec<PaletteSample>> {
        let pixels = self.qualifying_pixels(image);
        if pixels.is_empty() {
            return Err(PipelineError::ColorDetection {
                message: format!(
                    "no pixels with alpha > {} in {}x{} image",
                    self.alpha_threshold,
                    image.width(),
                    image.height()
                ),
            });
        }

        let fit = self
            .kmeans
            .fit(&pixels)
            .ok_or_else(|| PipelineError::ColorDetection {
                message: "clustering produced no centroids".to_string(),
            })?;

        tracing::trace!(
            "Clustered {} pixels into {} colors ({} iterations)",
            pixels.len(),
            fit.centroids.len(),
            fit.iterations
        );

        Ok(fit
            .rounded_centroids()
            .into_iter()
            .map(|rgb| PaletteSample::new(rgb, self.namer.nearest(rgb)))
            .collect())
    }

    /// Extract `k` dominant color names, in cluster order.
    pub fn extract_names(&self, image: &RgbaImage) -> PipelineResult<Vec<String>> {
        Ok(self
            .extract(image)?
            .into_iter()
            .map(|sample| sample.name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn half_transparent(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([220, 20, 60, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn test_transparent_pixels_are_ignored() {
        let extractor = ColorExtractor::new(&ColorConfig::default());
        let names = extractor.extract_names(&half_transparent(40, 20)).unwrap();
        assert_eq!(names, vec!["crimson", "crimson", "crimson"]);
    }

    #[test]
    fn test_fully_transparent_image_is_an_error() {
        let extractor = ColorExtractor::new(&ColorConfig::default());
        let img = RgbaImage::from_pixel(16, 16, Rgba([255, 0, 0, 0]));
        let err = extractor.extract(&img).unwrap_err();
        assert!(matches!(err, PipelineError::ColorDetection { .. }));
    }

    #[test]
    fn test_alpha_equal_to_threshold_does_not_qualify() {
        let extractor = ColorExtractor::new(&ColorConfig::default());
        let img = RgbaImage::from_pixel(8, 8, Rgba([10, 200, 10, 200]));
        assert!(extractor.qualifying_pixels(&img).is_empty());
        assert!(extractor.extract(&img).is_err());

        let img = RgbaImage::from_pixel(8, 8, Rgba([10, 200, 10, 201]));
        assert_eq!(extractor.qualifying_pixels(&img).len(), 64);
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let extractor = ColorExtractor::new(&ColorConfig::default());
        let img = RgbaImage::from_fn(64, 64, |x, y| {
            Rgba([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8, 255])
        });
        let first = extractor.extract(&img).unwrap();
        let second = extractor.extract(&img).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_num_colors_follows_config() {
        let config = ColorConfig {
            num_colors: 5,
            ..ColorConfig::default()
        };
        let extractor = ColorExtractor::new(&config);
        assert_eq!(extractor.num_colors(), 5);
        let img = RgbaImage::from_fn(32, 32, |x, y| Rgba([x as u8 * 8, y as u8 * 8, 0, 255]));
        assert_eq!(extractor.extract(&img).unwrap().len(), 5);
    }
}
