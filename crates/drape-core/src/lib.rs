//! Drape Core - garment segmentation and description library.
//!
//! Drape takes a photo of a person and returns every garment it finds as a
//! separate alpha-matted image, together with a multi-label description
//! (season, occasion, category, type, colors, style, fit and
//! category-specific details).
//!
//! # Architecture
//!
//! ```text
//! Photo → Decode → Segment (dense net) → per class: Isolate → Describe (zero-shot + colors) → Encode
//! ```
//!
//! Models are loaded once and shared read-only; every photo is one
//! synchronous invocation that touches no other state.
//!
//! # Usage
//!
//! ```rust,ignore
//! use drape_core::{Config, Drape};
//!
//! fn main() -> drape_core::Result<()> {
//!     let drape = Drape::new(Config::load()?)?;
//!     let report = drape.segment_file("./look.jpg")?;
//!     for garment in &report.garments {
//!         println!("{}: {:?}", garment.filename, garment.metadata.get("types"));
//!     }
//!     Ok(())
//! }
//! ```

pub mod attributes;
pub mod color;
pub mod config;
pub mod error;
pub mod math;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod segmentation;
pub mod types;

use std::path::Path;
use std::sync::Arc;

pub use attributes::{AttributeAggregator, AttributeClassifier, AttributeTaxonomy, ZeroShotScorer};
pub use color::{ColorExtractor, ColorNamer};
pub use config::Config;
pub use error::{ConfigError, DrapeError, PipelineError, PipelineResult, Result};
pub use models::LoadedModels;
pub use output::{ArtifactWriter, GarmentSummary, OutputFormat, OutputWriter, ReportSummary};
pub use pipeline::GarmentPipeline;
pub use segmentation::{DenseModel, SegmentationEngine};
pub use types::{ClassMask, GarmentRegion, MetadataRecord, PaletteSample, SegmentationReport};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main entry point: configuration plus a ready pipeline.
pub struct Drape {
    config: Config,
    pipeline: GarmentPipeline,
}

impl Drape {
    /// Load (or reuse) the process-wide models and build a pipeline.
    pub fn new(config: Config) -> Result<Self> {
        tracing::debug!("Initializing Drape v{}", VERSION);
        let models = LoadedModels::global(&config)?;
        Self::with_models(config, models)
    }

    /// Build around models the caller already holds.
    pub fn with_models(config: Config, models: Arc<LoadedModels>) -> Result<Self> {
        let pipeline = GarmentPipeline::new(&config, models)?;
        Ok(Self { config, pipeline })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pipeline(&self) -> &GarmentPipeline {
        &self.pipeline
    }

    /// Segment and describe a photo given as encoded bytes.
    pub fn segment_bytes(&self, bytes: &[u8]) -> Result<SegmentationReport> {
        Ok(self.pipeline.process_bytes(bytes)?)
    }

    /// Segment and describe a photo on disk.
    pub fn segment_file(&self, path: impl AsRef<Path>) -> Result<SegmentationReport> {
        let bytes = std::fs::read(path.as_ref())?;
        self.segment_bytes(&bytes)
    }
}
