//! Image decoding with format detection and dimension limits.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::config::LimitsConfig;
use crate::error::{PipelineError, PipelineResult};

/// Decodes photos from memory, enforcing the configured dimension limit.
pub struct ImageDecoder {
    limits: LimitsConfig,
}

/// Result of decoding a photo.
pub struct DecodedImage {
    pub image: DynamicImage,
    /// Format detected from content
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl ImageDecoder {
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Decode bytes of any supported raster format.
    ///
    /// The format is guessed from content, never from a filename.
    pub fn decode(&self, bytes: &[u8]) -> PipelineResult<DecodedImage> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| PipelineError::ImageDecode {
                message: format!("Cannot detect image format: {e}"),
            })?;
        let format = reader.format().ok_or_else(|| PipelineError::UnsupportedFormat {
            format: "unknown".to_string(),
        })?;
        let image = reader.decode().map_err(|e| PipelineError::ImageDecode {
            message: e.to_string(),
        })?;

        let (width, height) = (image.width(), image.height());
        let max_dim = self.limits.max_image_dimension;
        if width > max_dim || height > max_dim {
            return Err(PipelineError::ImageTooLarge {
                width,
                height,
                max_dim,
            });
        }
        if width == 0 || height == 0 {
            return Err(PipelineError::ImageDecode {
                message: format!("Image has no pixels ({width}x{height})"),
            });
        }

        tracing::trace!("Decoded {} image {}x{}", format_to_string(format), width, height);
        Ok(DecodedImage {
            image,
            format,
            width,
            height,
        })
    }
}

/// Convert an ImageFormat to a string representation.
pub fn format_to_string(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::Png => "png",
        ImageFormat::WebP => "webp",
        ImageFormat::Gif => "gif",
        ImageFormat::Tiff => "tiff",
        ImageFormat::Bmp => "bmp",
        other => other.extensions_str().first().copied().unwrap_or("unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([10, 20, 30]));
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_format_to_string() {
        assert_eq!(format_to_string(ImageFormat::Jpeg), "jpeg");
        assert_eq!(format_to_string(ImageFormat::Png), "png");
        assert_eq!(format_to_string(ImageFormat::WebP), "webp");
        assert_eq!(format_to_string(ImageFormat::Qoi), "qoi");
    }

    #[test]
    fn test_decode_png() {
        let decoded = ImageDecoder::new(LimitsConfig::default())
            .decode(&png_bytes(12, 7))
            .unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!((decoded.width, decoded.height), (12, 7));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = ImageDecoder::new(LimitsConfig::default())
            .decode(b"\x89PNG\r\n\x1a\n but truncated")
            .err()
            .unwrap();
        assert!(matches!(err, PipelineError::ImageDecode { .. }));
    }

    #[test]
    fn test_dimension_limit() {
        let decoder = ImageDecoder::new(LimitsConfig {
            max_image_dimension: 10,
            ..LimitsConfig::default()
        });
        let err = decoder.decode(&png_bytes(11, 5)).err().unwrap();
        assert!(matches!(
            err,
            PipelineError::ImageTooLarge {
                width: 11,
                height: 5,
                max_dim: 10
            }
        ));
    }
}
