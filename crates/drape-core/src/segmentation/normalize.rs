//! Tensor construction and per-channel normalization for the segmentation network.
//!
//! The network consumes NCHW float tensors with values scaled to [0, 1] and
//! then normalized as `(v - mean) / std` per channel. Parameters exist for
//! 1-channel (grayscale), 3-channel (RGB) and 18-channel (stacked feature)
//! inputs; the variant is picked from the tensor's channel count.

use image::DynamicImage;
use ndarray::Array4;

use crate::error::{PipelineError, PipelineResult};

/// Per-channel normalization parameters, keyed by channel count.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalization {
    Mono { mean: [f32; 1], std: [f32; 1] },
    Rgb { mean: [f32; 3], std: [f32; 3] },
    Stacked { mean: [f32; 18], std: [f32; 18] },
}

impl Normalization {
    /// Select the variant for `channels`, filling every channel with `mean`/`std`.
    pub fn for_channels(channels: usize, mean: f32, std: f32) -> PipelineResult<Self> {
        match channels {
            1 => Ok(Self::Mono {
                mean: [mean],
                std: [std],
            }),
            3 => Ok(Self::Rgb {
                mean: [mean; 3],
                std: [std; 3],
            }),
            18 => Ok(Self::Stacked {
                mean: [mean; 18],
                std: [std; 18],
            }),
            other => Err(PipelineError::UnsupportedChannels { channels: other }),
        }
    }

    /// Number of channels this variant normalizes.
    pub fn channels(&self) -> usize {
        self.params().0.len()
    }

    fn params(&self) -> (&[f32], &[f32]) {
        match self {
            Self::Mono { mean, std } => (&mean[..], &std[..]),
            Self::Rgb { mean, std } => (&mean[..], &std[..]),
            Self::Stacked { mean, std } => (&mean[..], &std[..]),
        }
    }

    /// Normalize an NCHW tensor in place.
    pub fn apply(&self, tensor: &mut Array4<f32>) -> PipelineResult<()> {
        let channels = tensor.shape()[1];
        if channels != self.channels() {
            return Err(PipelineError::UnsupportedChannels { channels });
        }
        let (mean, std) = self.params();
        for (c, mut plane) in tensor.axis_iter_mut(ndarray::Axis(1)).enumerate() {
            let (m, s) = (mean[c], std[c]);
            plane.mapv_inplace(|v| (v - m) / s);
        }
        Ok(())
    }
}

/// Convert an image into a `[1, channels, H, W]` tensor with values in [0, 1].
///
/// Photos can only be presented as 1 (grayscale) or 3 (RGB) channels.
pub fn image_to_tensor(image: &DynamicImage, channels: usize) -> PipelineResult<Array4<f32>> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let mut tensor = Array4::<f32>::zeros((1, channels, height, width));

    match channels {
        1 => {
            let luma = image.to_luma8();
            for (x, y, p) in luma.enumerate_pixels() {
                tensor[[0, 0, y as usize, x as usize]] = p.0[0] as f32 / 255.0;
            }
        }
        3 => {
            let rgb = image.to_rgb8();
            let plane = width * height;
            let data = tensor
                .as_slice_mut()
                .ok_or_else(|| PipelineError::inference("segmentation", "tensor not contiguous"))?;
            for (i, pixel) in rgb.as_raw().chunks_exact(3).enumerate() {
                for (c, &val) in pixel.iter().enumerate() {
                    data[c * plane + i] = val as f32 / 255.0;
                }
            }
        }
        other => return Err(PipelineError::UnsupportedChannels { channels: other }),
    }

    Ok(tensor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_for_channels_selects_variant() {
        assert!(matches!(
            Normalization::for_channels(1, 0.5, 0.5).unwrap(),
            Normalization::Mono { .. }
        ));
        assert!(matches!(
            Normalization::for_channels(3, 0.5, 0.5).unwrap(),
            Normalization::Rgb { .. }
        ));
        let stacked = Normalization::for_channels(18, 0.5, 0.5).unwrap();
        assert_eq!(stacked.channels(), 18);
    }

    #[test]
    fn test_for_channels_rejects_unsupported() {
        for channels in [0, 2, 4, 17] {
            let err = Normalization::for_channels(channels, 0.5, 0.5).unwrap_err();
            assert!(matches!(
                err,
                PipelineError::UnsupportedChannels { channels: c } if c == channels
            ));
        }
    }

    #[test]
    fn test_apply_maps_unit_range_to_symmetric_range() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        }));
        let mut tensor = image_to_tensor(&img, 3).unwrap();
        Normalization::for_channels(3, 0.5, 0.5)
            .unwrap()
            .apply(&mut tensor)
            .unwrap();
        for c in 0..3 {
            assert!((tensor[[0, c, 0, 0]] + 1.0).abs() < 1e-6);
            assert!((tensor[[0, c, 0, 1]] - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_apply_rejects_mismatched_tensor() {
        let mut tensor = Array4::<f32>::zeros((1, 3, 4, 4));
        let mono = Normalization::for_channels(1, 0.5, 0.5).unwrap();
        assert!(mono.apply(&mut tensor).is_err());
    }

    #[test]
    fn test_stacked_normalization_touches_every_channel() {
        let mut tensor = Array4::<f32>::ones((1, 18, 2, 2));
        Normalization::for_channels(18, 0.5, 0.25)
            .unwrap()
            .apply(&mut tensor)
            .unwrap();
        assert!(tensor.iter().all(|&v| (v - 2.0).abs() < 1e-6));
    }

    #[test]
    fn test_image_to_tensor_layout_is_nchw() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(3, 2, |x, y| {
            Rgb([(x * 10) as u8, (y * 100) as u8, 255])
        }));
        let tensor = image_to_tensor(&img, 3).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 2, 3]);
        assert!((tensor[[0, 0, 1, 2]] - 20.0 / 255.0).abs() < 1e-6);
        assert!((tensor[[0, 1, 1, 2]] - 100.0 / 255.0).abs() < 1e-6);
        assert!((tensor[[0, 2, 0, 0]] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_image_to_tensor_grayscale() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([255, 255, 255])));
        let tensor = image_to_tensor(&img, 1).unwrap();
        assert_eq!(tensor.shape(), &[1, 1, 2, 2]);
        assert!(tensor.iter().all(|&v| (v - 1.0).abs() < 1e-6));
    }
}
