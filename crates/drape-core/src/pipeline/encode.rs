//! Re-encoding isolated garments and naming their artifacts.

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage, RgbaImage};

use crate::error::{PipelineError, PipelineResult};

/// Extension of the lossy garment encoding.
pub const IMAGE_EXTENSION: &str = "jpg";

/// Extension of the sibling metadata file.
pub const METADATA_EXTENSION: &str = "json";

/// Encode an isolated garment as JPEG.
///
/// JPEG has no alpha channel, so transparent pixels come out black.
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> PipelineResult<Vec<u8>> {
    let rgb = RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, _] = image.get_pixel(x, y).0;
        Rgb([r, g, b])
    });

    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality)
        .encode_image(&rgb)
        .map_err(|e| PipelineError::Encode {
            message: format!("JPEG encoding failed: {e}"),
        })?;
    Ok(buf)
}

/// `clothing_{class_id}_{request_id}.{ext}`
pub fn garment_filename(class_id: u8, request_id: &str, ext: &str) -> String {
    format!("clothing_{class_id}_{request_id}.{ext}")
}

/// Same stem as `filename`, with the metadata extension.
pub fn metadata_filename(filename: &str) -> String {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(filename);
    format!("{stem}.{METADATA_EXTENSION}")
}
