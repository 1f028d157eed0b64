//! Process-wide model state.
//!
//! Both networks are loaded once and then shared read-only by every pipeline
//! invocation. Nothing here can be mutated after load.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::attributes::{ClipScorer, ZeroShotScorer};
use crate::config::Config;
use crate::error::PipelineResult;
use crate::segmentation::SegmentationEngine;

static GLOBAL: OnceLock<Arc<LoadedModels>> = OnceLock::new();

/// The segmentation network and the zero-shot scorer.
pub struct LoadedModels {
    segmentation: SegmentationEngine,
    scorer: Arc<dyn ZeroShotScorer>,
}

impl LoadedModels {
    /// Load both models from the configured model directory.
    ///
    /// Fails with `ModelUnavailable` when any artifact is missing or unreadable.
    pub fn load(config: &Config) -> PipelineResult<Self> {
        let segmentation = SegmentationEngine::load(&config.segmentation, &config.model_dir())?;
        let scorer = ClipScorer::load(&config.classifier, &config.classifier_dir())?;
        Ok(Self::from_parts(segmentation, Arc::new(scorer)))
    }

    /// Assemble from already-constructed parts.
    pub fn from_parts(segmentation: SegmentationEngine, scorer: Arc<dyn ZeroShotScorer>) -> Self {
        Self {
            segmentation,
            scorer,
        }
    }

    /// Load once per process and hand out shared references afterwards.
    ///
    /// The configuration of the first successful call wins.
    pub fn global(config: &Config) -> PipelineResult<Arc<Self>> {
        if let Some(models) = GLOBAL.get() {
            return Ok(Arc::clone(models));
        }
        let loaded = Arc::new(Self::load(config)?);
        let _ = GLOBAL.set(Arc::clone(&loaded));
        Ok(GLOBAL.get().cloned().unwrap_or(loaded))
    }

    pub fn segmentation(&self) -> &SegmentationEngine {
        &self.segmentation
    }

    pub fn scorer(&self) -> Arc<dyn ZeroShotScorer> {
        Arc::clone(&self.scorer)
    }
}

/// One file the models need on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelArtifact {
    pub name: &'static str,
    pub path: PathBuf,
    pub present: bool,
}

/// Every file [`LoadedModels::load`] reads, with whether it exists.
pub fn expected_artifacts(config: &Config) -> Vec<ModelArtifact> {
    let [classifier_model, tokenizer] = ClipScorer::expected_files(&config.classifier_dir());
    [
        ("segmentation model", config.segmentation_model_path()),
        ("classifier model", classifier_model),
        ("classifier tokenizer", tokenizer),
    ]
    .into_iter()
    .map(|(name, path)| ModelArtifact {
        name,
        present: path.exists(),
        path,
    })
    .collect()
}
