//! Dominant color extraction and perceptual color naming.
//!
//! Opaque garment pixels are clustered with a seeded k-means, and each
//! centroid is named after the closest entry (CIE76 distance in Lab space) of
//! a combined CSS4 + XKCD dictionary.

pub mod extractor;
pub mod kmeans;
pub mod namer;
pub mod names;

pub use extractor::ColorExtractor;
pub use kmeans::{KMeans, KMeansFit};
pub use namer::ColorNamer;
