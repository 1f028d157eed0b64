//! Garment attribute description.
//!
//! Each isolated garment is scored against free-text label lists with a
//! zero-shot image/text model. Labels whose probability clears the threshold
//! are accepted, so a category may end up with zero, one or many labels.
//! Dominant colors come from [`crate::color`] rather than the classifier.

pub mod aggregator;
pub mod classifier;
pub mod clip;
pub mod preprocess;
pub mod taxonomy;

pub use aggregator::AttributeAggregator;
pub use classifier::{AttributeClassifier, ZeroShotScorer};
pub use clip::ClipScorer;
pub use taxonomy::AttributeTaxonomy;
