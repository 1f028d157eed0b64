//! Per-pixel hard class decisions from dense class scores.

use std::collections::BTreeMap;

use ndarray::Array4;

use crate::error::{PipelineError, PipelineResult};
use crate::math::{argmax, log_softmax_into};
use crate::types::ClassMask;

/// Class id reserved for background; never reported as a garment.
pub const BACKGROUND_CLASS: u8 = 0;

/// Winning class per pixel at working resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMap {
    width: u32,
    height: u32,
    labels: Vec<u8>,
}

impl ClassMap {
    /// Decide one class per pixel from `[1, C, H, W]` scores.
    ///
    /// Scores are turned into log-probabilities over the class axis, then the
    /// arg-max wins. Ties go to the lowest class id.
    pub fn from_scores(scores: &Array4<f32>) -> PipelineResult<Self> {
        let shape = scores.shape();
        let (batch, classes, height, width) = (shape[0], shape[1], shape[2], shape[3]);
        if batch != 1 {
            return Err(PipelineError::inference(
                "segmentation",
                format!("expected batch size 1, got {batch}"),
            ));
        }
        if classes == 0 || classes > u8::MAX as usize + 1 {
            return Err(PipelineError::inference(
                "segmentation",
                format!("unsupported class count {classes}"),
            ));
        }

        let mut labels = Vec::with_capacity(height * width);
        let mut column = vec![0.0f32; classes];
        let mut log_probs = vec![0.0f32; classes];
        for y in 0..height {
            for x in 0..width {
                for (c, slot) in column.iter_mut().enumerate() {
                    *slot = scores[[0, c, y, x]];
                }
                log_softmax_into(&column, &mut log_probs);
                let winner = argmax(&log_probs).unwrap_or(BACKGROUND_CLASS as usize);
                labels.push(winner as u8);
            }
        }

        Ok(Self {
            width: width as u32,
            height: height as u32,
            labels,
        })
    }

    /// Build a map directly from row-major labels.
    pub fn from_labels(width: u32, height: u32, labels: Vec<u8>) -> Option<Self> {
        if labels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            labels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Winning class at `(x, y)`.
    pub fn label(&self, x: u32, y: u32) -> u8 {
        self.labels[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Pixel count per class, background included.
    pub fn histogram(&self) -> BTreeMap<u8, usize> {
        let mut counts = BTreeMap::new();
        for &l in &self.labels {
            *counts.entry(l).or_insert(0) += 1;
        }
        counts
    }

    /// Foreground classes owning at least one pixel, ascending.
    pub fn present_classes(&self) -> Vec<u8> {
        self.histogram()
            .into_keys()
            .filter(|&c| c != BACKGROUND_CLASS)
            .collect()
    }

    /// Membership mask of one class.
    pub fn mask_for(&self, class_id: u8) -> ClassMask {
        let bits = self.labels.iter().map(|&l| l == class_id).collect();
        ClassMask::from_parts(class_id, self.width, self.height, bits)
    }

    /// One mask per present foreground class.
    pub fn masks(&self) -> BTreeMap<u8, ClassMask> {
        self.present_classes()
            .into_iter()
            .map(|c| (c, self.mask_for(c)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_from(
        classes: usize,
        width: usize,
        height: usize,
        winner: impl Fn(usize, usize) -> usize,
    ) -> Array4<f32> {
        let mut scores = Array4::<f32>::zeros((1, classes, height, width));
        for y in 0..height {
            for x in 0..width {
                scores[[0, winner(x, y), y, x]] = 5.0;
            }
        }
        scores
    }

    #[test]
    fn test_argmax_per_pixel() {
        let scores = scores_from(4, 4, 2, |x, _| x);
        let map = ClassMap::from_scores(&scores).unwrap();
        assert_eq!(map.label(0, 0), 0);
        assert_eq!(map.label(3, 1), 3);
        assert_eq!(map.present_classes(), vec![1, 2, 3]);
    }

    #[test]
    fn test_absent_classes_are_omitted() {
        let scores = scores_from(4, 3, 3, |x, y| if x == 1 && y == 1 { 2 } else { 0 });
        let map = ClassMap::from_scores(&scores).unwrap();
        let masks = map.masks();
        assert_eq!(masks.keys().copied().collect::<Vec<_>>(), vec![2]);
        assert_eq!(masks[&2].pixel_count(), 1);
        assert!(masks[&2].get(1, 1));
    }

    #[test]
    fn test_background_only_yields_no_masks() {
        let scores = scores_from(4, 5, 5, |_, _| 0);
        let map = ClassMap::from_scores(&scores).unwrap();
        assert!(map.masks().is_empty());
    }

    #[test]
    fn test_ties_resolve_to_lowest_class() {
        let scores = Array4::<f32>::zeros((1, 4, 2, 2));
        let map = ClassMap::from_scores(&scores).unwrap();
        assert_eq!(map.histogram()[&0], 4);
    }

    #[test]
    fn test_rejects_batched_scores() {
        let scores = Array4::<f32>::zeros((2, 4, 2, 2));
        assert!(ClassMap::from_scores(&scores).is_err());
    }

    #[test]
    fn test_from_labels_validates_length() {
        assert!(ClassMap::from_labels(2, 2, vec![0, 1, 1]).is_none());
        let map = ClassMap::from_labels(2, 2, vec![0, 1, 1, 3]).unwrap();
        assert_eq!(map.present_classes(), vec![1, 3]);
    }
}
