//! Core data types for the garment pipeline.

use std::collections::BTreeMap;

use image::{GrayImage, Luma, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Binary membership grid for one garment class at the network's working resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMask {
    class_id: u8,
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl ClassMask {
    /// Build a mask from row-major membership bits.
    ///
    /// Returns `None` if `bits.len() != width * height`.
    pub fn from_bits(class_id: u8, width: u32, height: u32, bits: Vec<bool>) -> Option<Self> {
        if bits.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            class_id,
            width,
            height,
            bits,
        })
    }

    /// Crate-internal constructor for callers that already own a grid of the right size.
    pub(crate) fn from_parts(class_id: u8, width: u32, height: u32, bits: Vec<bool>) -> Self {
        debug_assert_eq!(bits.len(), (width as usize) * (height as usize));
        Self {
            class_id,
            width,
            height,
            bits,
        }
    }

    /// Class identifier this mask belongs to.
    pub fn class_id(&self) -> u8 {
        self.class_id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether pixel `(x, y)` belongs to the class.
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Number of member pixels.
    pub fn pixel_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Render as an 8-bit mask: 255 for members, 0 elsewhere.
    pub fn to_luma(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            Luma([if self.get(x, y) { 255 } else { 0 }])
        })
    }
}

/// Accepted labels per attribute category.
///
/// Multi-label: each key maps to zero, one or many labels. Keys are the
/// taxonomy category names and serialize as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord(BTreeMap<String, Vec<String>>);

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the labels of a category, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, labels: Vec<String>) {
        self.0.insert(key.into(), labels);
    }

    /// Labels of a category, if the category is present.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Whether `label` was accepted for `key`.
    pub fn contains(&self, key: &str, label: &str) -> bool {
        self.get(key)
            .map(|labels| labels.iter().any(|l| l == label))
            .unwrap_or(false)
    }

    /// Whether every key in `keys` is present (possibly with an empty list).
    pub fn covers<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> bool {
        keys.into_iter().all(|k| self.0.contains_key(k))
    }

    /// Category names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A dominant color and its resolved name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteSample {
    /// Centroid rounded to integer RGB
    pub rgb: [u8; 3],
    /// Closest dictionary name in Lab space
    pub name: String,
}

impl PaletteSample {
    pub fn new(rgb: [u8; 3], name: impl Into<String>) -> Self {
        Self {
            rgb,
            name: name.into(),
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// One isolated garment produced by a pipeline invocation.
#[derive(Debug, Clone)]
pub struct GarmentRegion {
    /// Segmentation class the garment came from
    pub class_id: u8,
    /// `clothing_{class_id}_{request_id}.{ext}`
    pub filename: String,
    /// Alpha-matted garment at source resolution (alpha 255 inside the mask, 0 outside)
    pub image: RgbaImage,
    /// Lossy re-encode of `image`
    pub encoded: Vec<u8>,
    /// Attributes assigned to the garment
    pub metadata: MetadataRecord,
    /// Member pixels at source resolution
    pub pixel_count: usize,
}

impl GarmentRegion {
    /// Filename of the sibling metadata file (`.json` in place of the image extension).
    pub fn metadata_filename(&self) -> String {
        crate::pipeline::encode::metadata_filename(&self.filename)
    }
}

/// A garment that could not be processed; its siblings are unaffected.
#[derive(Debug)]
pub struct GarmentFailure {
    pub class_id: u8,
    pub error: PipelineError,
}

/// Everything one pipeline invocation produced for one photo.
#[derive(Debug)]
pub struct SegmentationReport {
    /// Per-request identifier embedded in every filename
    pub request_id: String,
    /// Source image width
    pub width: u32,
    /// Source image height
    pub height: u32,
    /// Garments in ascending class id order; empty when nothing was detected
    pub garments: Vec<GarmentRegion>,
    /// Garments that failed in isolation, in ascending class id order
    pub failures: Vec<GarmentFailure>,
}

impl SegmentationReport {
    /// Whether no garment class was detected at all.
    pub fn is_empty(&self) -> bool {
        self.garments.is_empty() && self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_mask_rejects_wrong_length() {
        assert!(ClassMask::from_bits(1, 2, 2, vec![true; 3]).is_none());
        assert!(ClassMask::from_bits(1, 2, 2, vec![true; 4]).is_some());
    }

    #[test]
    fn test_class_mask_luma_and_count() {
        let mask = ClassMask::from_bits(2, 2, 2, vec![true, false, false, true]).unwrap();
        assert_eq!(mask.pixel_count(), 2);
        let luma = mask.to_luma();
        assert_eq!(luma.get_pixel(0, 0).0[0], 255);
        assert_eq!(luma.get_pixel(1, 0).0[0], 0);
        assert_eq!(luma.get_pixel(1, 1).0[0], 255);
    }

    #[test]
    fn test_metadata_record_serializes_flat() {
        let mut record = MetadataRecord::new();
        record.insert("seasons", vec!["summer".to_string()]);
        record.insert("fits", vec![]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"fits":[],"seasons":["summer"]}"#);

        let parsed: MetadataRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_metadata_record_covers_and_contains() {
        let mut record = MetadataRecord::new();
        record.insert("categories", vec!["tops".to_string()]);
        record.insert("styles", vec![]);
        assert!(record.covers(["categories", "styles"]));
        assert!(!record.covers(["categories", "fits"]));
        assert!(record.contains("categories", "tops"));
        assert!(!record.contains("styles", "casual"));
    }

    #[test]
    fn test_palette_sample_hex() {
        let sample = PaletteSample::new([220, 20, 60], "crimson");
        assert_eq!(sample.hex(), "#dc143c");
    }
}
