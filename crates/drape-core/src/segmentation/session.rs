//! ONNX Runtime session for the cloth segmentation network.
//!
//! The network is a U²-Net style model with several side outputs; the first
//! output is the fused full-resolution head and is the only one used.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ndarray::Array4;
use ort::session::Session;
use ort::value::Value;

use crate::error::{PipelineError, PipelineResult};

use super::DenseModel;

/// Wraps an ONNX Runtime session producing `[1, C, H, W]` class scores.
///
/// Uses a `Mutex` because `Session::run` requires `&mut self`, so
/// concurrent callers take turns on the forward pass.
pub struct OnnxDenseModel {
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
    path: PathBuf,
}

impl OnnxDenseModel {
    /// Load the segmentation network from an ONNX file.
    pub fn load(model_path: &Path) -> PipelineResult<Self> {
        if !model_path.exists() {
            return Err(PipelineError::model_unavailable(
                model_path,
                "Segmentation model not found. Place the ONNX weights there or set segmentation.model_file.",
            ));
        }

        let session = Session::builder()
            .map_err(|e| {
                PipelineError::model_unavailable(
                    model_path,
                    format!("Failed to create ONNX session builder: {e}"),
                )
            })?
            .commit_from_file(model_path)
            .map_err(|e| {
                PipelineError::model_unavailable(model_path, format!("Failed to load ONNX model: {e}"))
            })?;

        let input_name = session
            .inputs()
            .first()
            .map(|i| i.name().to_string())
            .unwrap_or_else(|| "input".to_string());
        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| PipelineError::model_unavailable(model_path, "Model declares no outputs"))?;

        tracing::debug!(
            "Loaded segmentation model from {:?} (input: {:?}, output: {:?})",
            model_path,
            input_name,
            output_name
        );

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
            path: model_path.to_path_buf(),
        })
    }

    /// Path the weights were loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DenseModel for OnnxDenseModel {
    fn forward(&self, input: &Array4<f32>) -> PipelineResult<Array4<f32>> {
        let shape: Vec<i64> = input.shape().iter().map(|&d| d as i64).collect();
        let flat_data: Vec<f32> = input.iter().copied().collect();

        let input_value = Value::from_array((shape, flat_data)).map_err(|e| {
            PipelineError::inference("segmentation", format!("Failed to create input tensor: {e}"))
        })?;

        let inputs = ort::inputs![self.input_name.as_str() => input_value];

        let mut session = self.session.lock().map_err(|e| {
            PipelineError::inference("segmentation", format!("Session lock poisoned: {e}"))
        })?;

        let outputs = session.run(inputs).map_err(|e| {
            PipelineError::inference("segmentation", format!("ONNX inference failed: {e}"))
        })?;

        let head = outputs
            .iter()
            .find(|(name, _)| *name == self.output_name)
            .ok_or_else(|| {
                PipelineError::inference(
                    "segmentation",
                    format!("Model did not produce {}", self.output_name),
                )
            })?;

        let (shape, data) = head.1.try_extract_tensor::<f32>().map_err(|e| {
            PipelineError::inference("segmentation", format!("Failed to extract scores: {e}"))
        })?;

        if shape.len() != 4 {
            return Err(PipelineError::inference(
                "segmentation",
                format!("Unexpected score shape: {:?}", shape),
            ));
        }
        let dims = (
            shape[0] as usize,
            shape[1] as usize,
            shape[2] as usize,
            shape[3] as usize,
        );

        Array4::from_shape_vec(dims, data.to_vec()).map_err(|e| {
            PipelineError::inference("segmentation", format!("Score tensor has wrong length: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_is_unavailable() {
        let err = OnnxDenseModel::load(Path::new("/nonexistent/cloth_segm.onnx"))
            .err()
            .unwrap();
        assert!(matches!(err, PipelineError::ModelUnavailable { .. }));
    }
}
