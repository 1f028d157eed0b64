//! Lifting working-resolution masks back onto the source photo.

use image::imageops::{self, FilterType};
use image::{GrayImage, Rgba, RgbImage, RgbaImage};

use crate::error::{PipelineError, PipelineResult};
use crate::types::ClassMask;

/// Cuts one garment out of a photo with a hard alpha stencil.
pub struct MaskIsolator;

impl MaskIsolator {
    /// Resize a class mask to `width x height` as an 8-bit image.
    ///
    /// Uses the same bicubic family as the forward resize. The interpolated
    /// edge values are kept as-is; [`isolate`](Self::isolate) thresholds them.
    pub fn upsample(mask: &ClassMask, width: u32, height: u32) -> GrayImage {
        let luma = mask.to_luma();
        if luma.dimensions() == (width, height) {
            return luma;
        }
        imageops::resize(&luma, width, height, FilterType::CatmullRom)
    }

    /// Keep the photo's pixels where the upsampled mask is non-zero.
    ///
    /// Kept pixels are fully opaque; everything else becomes `(0, 0, 0, 0)`.
    pub fn isolate(photo: &RgbImage, mask: &ClassMask) -> PipelineResult<RgbaImage> {
        let (width, height) = photo.dimensions();
        if width == 0 || height == 0 {
            return Err(PipelineError::ImageDecode {
                message: "cannot isolate a garment from an empty photo".to_string(),
            });
        }

        let stencil = Self::upsample(mask, width, height);
        Ok(RgbaImage::from_fn(width, height, |x, y| {
            if stencil.get_pixel(x, y).0[0] > 0 {
                let [r, g, b] = photo.get_pixel(x, y).0;
                Rgba([r, g, b, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        }))
    }

    /// Opaque pixels of an isolated garment.
    pub fn opaque_pixels(isolated: &RgbaImage) -> usize {
        isolated.pixels().filter(|p| p.0[3] > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn square_mask(size: u32, from: u32, to: u32) -> ClassMask {
        let bits = (0..size * size)
            .map(|i| {
                let (x, y) = (i % size, i / size);
                (from..to).contains(&x) && (from..to).contains(&y)
            })
            .collect();
        ClassMask::from_bits(1, size, size, bits).unwrap()
    }

    #[test]
    fn test_isolate_same_resolution_is_exact() {
        let photo = RgbImage::from_pixel(8, 8, Rgb([220, 20, 60]));
        let mask = square_mask(8, 2, 5);
        let out = MaskIsolator::isolate(&photo, &mask).unwrap();

        assert_eq!(MaskIsolator::opaque_pixels(&out), 9);
        assert_eq!(out.get_pixel(2, 2).0, [220, 20, 60, 255]);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(out.get_pixel(5, 5).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_isolate_upsamples_to_photo_size() {
        let photo = RgbImage::from_pixel(64, 32, Rgb([10, 200, 10]));
        let mask = square_mask(16, 0, 16);
        let out = MaskIsolator::isolate(&photo, &mask).unwrap();
        assert_eq!(out.dimensions(), (64, 32));
        assert_eq!(MaskIsolator::opaque_pixels(&out), 64 * 32);
    }

    #[test]
    fn test_empty_mask_gives_transparent_image() {
        let photo = RgbImage::from_pixel(20, 20, Rgb([1, 2, 3]));
        let mask = ClassMask::from_bits(2, 10, 10, vec![false; 100]).unwrap();
        let out = MaskIsolator::isolate(&photo, &mask).unwrap();
        assert_eq!(MaskIsolator::opaque_pixels(&out), 0);
    }

    #[test]
    fn test_upsample_keeps_interior() {
        let mask = square_mask(10, 3, 7);
        let up = MaskIsolator::upsample(&mask, 40, 40);
        assert_eq!(up.dimensions(), (40, 40));
        assert_eq!(up.get_pixel(20, 20).0[0], 255);
        assert_eq!(up.get_pixel(1, 1).0[0], 0);
    }

    #[test]
    fn test_pixels_are_rgb_or_transparent() {
        let photo = RgbImage::from_fn(30, 30, |x, y| Rgb([x as u8 * 8, y as u8 * 8, 128]));
        let out = MaskIsolator::isolate(&photo, &square_mask(12, 2, 9)).unwrap();
        for (x, y, p) in out.enumerate_pixels() {
            let [r, g, b, a] = p.0;
            if a == 255 {
                assert_eq!([r, g, b], photo.get_pixel(x, y).0);
            } else {
                assert_eq!(p.0, [0, 0, 0, 0]);
            }
        }
    }
}
