//! Image preprocessing for CLIP-style zero-shot scoring.
//!
//! CLIP ViT image towers expect:
//! - Shortest side resized to `image_size` (bicubic), then a center crop
//! - Normalization: (pixel/255 - mean) / std with the OpenAI CLIP constants
//! - Channel order: RGB
//! - Tensor layout: NCHW [batch, channels, height, width]

use image::imageops::FilterType;
use image::DynamicImage;
use ndarray::Array4;

const CHANNELS: usize = 3;

/// OpenAI CLIP normalization mean (per-channel).
pub const CLIP_MEAN: [f32; 3] = [0.481_454_66, 0.457_827_5, 0.408_210_73];

/// OpenAI CLIP normalization std (per-channel).
pub const CLIP_STD: [f32; 3] = [0.268_629_54, 0.261_302_6, 0.275_777_1];

/// Resize so the shortest side equals `image_size`, keeping aspect ratio.
fn resize_shortest_side(image: &DynamicImage, image_size: u32) -> DynamicImage {
    let (w, h) = (image.width().max(1), image.height().max(1));
    let (new_w, new_h) = if w <= h {
        let scaled = (h as u64 * image_size as u64 + w as u64 / 2) / w as u64;
        (image_size, (scaled as u32).max(image_size))
    } else {
        let scaled = (w as u64 * image_size as u64 + h as u64 / 2) / h as u64;
        ((scaled as u32).max(image_size), image_size)
    };
    if (new_w, new_h) == (w, h) {
        image.clone()
    } else {
        image.resize_exact(new_w, new_h, FilterType::CatmullRom)
    }
}

/// Preprocess an image into a `[1, 3, image_size, image_size]` CLIP tensor.
pub fn preprocess(image: &DynamicImage, image_size: u32) -> Array4<f32> {
    let resized = resize_shortest_side(image, image_size);
    let left = (resized.width() - image_size) / 2;
    let top = (resized.height() - image_size) / 2;
    let cropped = resized.crop_imm(left, top, image_size, image_size);
    let rgb = cropped.to_rgb8();

    let size = image_size as usize;
    let mut tensor = Array4::<f32>::zeros((1, CHANNELS, size, size));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..CHANNELS {
            tensor[[0, c, y as usize, x as usize]] =
                (pixel.0[c] as f32 / 255.0 - CLIP_MEAN[c]) / CLIP_STD[c];
        }
    }

    tensor
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_preprocess_shape_landscape_and_portrait() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(640, 480));
        assert_eq!(preprocess(&img, 224).shape(), &[1, 3, 224, 224]);
        let img = DynamicImage::ImageRgb8(RgbImage::new(300, 900));
        assert_eq!(preprocess(&img, 224).shape(), &[1, 3, 224, 224]);
    }

    #[test]
    fn test_preprocess_small_image_upscales() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(10, 20));
        assert_eq!(preprocess(&img, 32).shape(), &[1, 3, 32, 32]);
    }

    #[test]
    fn test_preprocess_uses_clip_constants() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(224, 224, Rgb([255, 255, 255])));
        let tensor = preprocess(&img, 224);
        for c in 0..3 {
            let expected = (1.0 - CLIP_MEAN[c]) / CLIP_STD[c];
            assert!((tensor[[0, c, 100, 100]] - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_center_crop_keeps_middle() {
        // Left and right thirds black, middle white: the crop keeps the middle.
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(300, 100, |x, _| {
            if (100..200).contains(&x) {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        }));
        let tensor = preprocess(&img, 100);
        let white = (1.0 - CLIP_MEAN[0]) / CLIP_STD[0];
        assert!((tensor[[0, 0, 50, 50]] - white).abs() < 1e-3);
    }
}
