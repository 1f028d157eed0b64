//! Nearest named color lookup in CIE Lab space.

use std::sync::OnceLock;

use palette::{FromColor, Lab, Srgb};

use super::names;

/// Convert an 8-bit sRGB triplet to CIE Lab (D65 white point).
pub fn rgb_to_lab(rgb: [u8; 3]) -> Lab {
    let srgb = Srgb::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    );
    Lab::from_color(srgb)
}

/// Euclidean distance between two Lab colors (CIE76 ΔE).
pub fn lab_distance(a: &Lab, b: &Lab) -> f32 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Maps RGB samples to the perceptually closest entry of the named-color dictionary.
///
/// Lab values for the dictionary are computed once at construction.
pub struct ColorNamer {
    entries: Vec<(&'static str, Lab)>,
}

impl Default for ColorNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorNamer {
    /// Build a namer over the full CSS4 + XKCD dictionary.
    pub fn new() -> Self {
        let entries = names::all()
            .map(|(name, rgb)| (name, rgb_to_lab(rgb)))
            .collect();
        Self { entries }
    }

    /// Process-wide namer, built on first use and never mutated.
    pub fn shared() -> &'static ColorNamer {
        static NAMER: OnceLock<ColorNamer> = OnceLock::new();
        NAMER.get_or_init(ColorNamer::new)
    }

    /// Number of dictionary entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the dictionary entry closest to `rgb`, with its Lab distance.
    ///
    /// Scans in dictionary order and only replaces the best match on a strictly
    /// smaller distance, so equal distances resolve to the earlier entry.
    pub fn nearest_with_distance(&self, rgb: [u8; 3]) -> (&'static str, f32) {
        let target = rgb_to_lab(rgb);
        let mut best = ("", f32::INFINITY);
        for (name, lab) in &self.entries {
            let distance = lab_distance(&target, lab);
            if distance < best.1 {
                best = (name, distance);
            }
        }
        best
    }

    /// Name of the dictionary entry closest to `rgb`.
    pub fn nearest(&self, rgb: [u8; 3]) -> &'static str {
        self.nearest_with_distance(rgb).0
    }
}
