//! CLIP zero-shot scorer backed by ONNX Runtime.
//!
//! Loads a joint image/text CLIP export (`onnx/model.onnx`) and its
//! `tokenizer.json`. One forward pass scores one image against every
//! candidate label; the logits are softmax-normalized over the candidates.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use image::DynamicImage;
use ort::session::Session;
use ort::value::Value;

use crate::config::ClassifierConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::math::softmax;

use super::classifier::ZeroShotScorer;
use super::preprocess::preprocess;

/// Model file location inside the classifier directory.
pub const MODEL_RELATIVE_PATH: &str = "onnx/model.onnx";

/// Tokenizer file inside the classifier directory.
pub const TOKENIZER_FILENAME: &str = "tokenizer.json";

/// Token ids, shape `[n_labels, seq_len]`.
const INPUT_IDS: &str = "input_ids";

/// 1 for real tokens, 0 for padding, same shape as the ids.
const ATTENTION_MASK: &str = "attention_mask";

/// Normalized image, shape `[1, 3, image_size, image_size]`.
const PIXEL_VALUES: &str = "pixel_values";

/// Output holding image-to-text similarity logits, shape `[1, n_labels]`.
const LOGITS_OUTPUT: &str = "logits_per_image";

/// CLIP end-of-text token, used as padding when the tokenizer declares none.
const END_OF_TEXT: &str = "<|endoftext|>";

/// Wraps a CLIP ONNX session and tokenizer.
///
/// Uses a `Mutex` because `Session::run` requires `&mut self`, so concurrent
/// callers take turns on the forward pass.
pub struct ClipScorer {
    session: Mutex<Session>,
    tokenizer: tokenizers::Tokenizer,
    image_size: u32,
    max_text_length: usize,
    pad_id: i64,
}

impl ClipScorer {
    /// Load the model and tokenizer from `model_dir`.
    ///
    /// Expects `onnx/model.onnx` and `tokenizer.json` in `model_dir`.
    pub fn load(config: &ClassifierConfig, model_dir: &Path) -> PipelineResult<Self> {
        let model_path = model_dir.join(MODEL_RELATIVE_PATH);
        let tokenizer_path = model_dir.join(TOKENIZER_FILENAME);

        if !model_path.exists() {
            return Err(PipelineError::model_unavailable(
                model_path,
                "Classifier model not found. Export the CLIP model to ONNX there.",
            ));
        }
        if !tokenizer_path.exists() {
            return Err(PipelineError::model_unavailable(
                tokenizer_path,
                "Tokenizer not found next to the classifier model.",
            ));
        }

        tracing::info!("Loading classifier model from {:?}", model_path);

        let session = Session::builder()
            .map_err(|e| {
                PipelineError::model_unavailable(
                    &model_path,
                    format!("Failed to create ONNX session builder: {e}"),
                )
            })?
            .commit_from_file(&model_path)
            .map_err(|e| {
                PipelineError::model_unavailable(&model_path, format!("Failed to load ONNX model: {e}"))
            })?;

        let tokenizer = tokenizers::Tokenizer::from_file(&tokenizer_path).map_err(|e| {
            PipelineError::model_unavailable(&tokenizer_path, format!("Failed to load tokenizer: {e}"))
        })?;

        let pad_id = tokenizer
            .get_padding()
            .map(|p| p.pad_id)
            .or_else(|| tokenizer.token_to_id(END_OF_TEXT))
            .unwrap_or(0) as i64;

        let inputs: Vec<&str> = session.inputs().iter().map(|i| i.name()).collect();
        let outputs: Vec<&str> = session.outputs().iter().map(|o| o.name()).collect();
        let missing_inputs = missing_names(&inputs, &[INPUT_IDS, ATTENTION_MASK, PIXEL_VALUES]);
        let missing_outputs = missing_names(&outputs, &[LOGITS_OUTPUT]);
        if !missing_inputs.is_empty() || !missing_outputs.is_empty() {
            return Err(PipelineError::model_unavailable(
                &model_path,
                format!(
                    "Not a joint CLIP export: missing inputs {missing_inputs:?}, \
                     missing outputs {missing_outputs:?} (model has inputs {inputs:?}, outputs {outputs:?})"
                ),
            ));
        }

        tracing::debug!(
            "Loaded classifier (inputs: {:?}, outputs: {:?}, pad id {})",
            inputs,
            outputs,
            pad_id
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            image_size: config.image_size,
            max_text_length: config.max_text_length,
            pad_id,
        })
    }

    /// Check whether the classifier model files exist.
    pub fn model_exists(model_dir: &Path) -> bool {
        Self::expected_files(model_dir).iter().all(|p| p.exists())
    }

    /// Files the classifier needs inside `model_dir`.
    pub fn expected_files(model_dir: &Path) -> [PathBuf; 2] {
        [
            model_dir.join(MODEL_RELATIVE_PATH),
            model_dir.join(TOKENIZER_FILENAME),
        ]
    }

    /// Tokenize labels, padded to the longest and truncated to `max_text_length`.
    /// Truncated rows keep their end-of-text token, which is where CLIP pools.
    ///
    /// Returns `(input_ids, attention_mask, sequence_length)` flattened row-major.
    fn tokenize(&self, labels: &[&str]) -> PipelineResult<(Vec<i64>, Vec<i64>, usize)> {
        let encodings = self
            .tokenizer
            .encode_batch(labels.to_vec(), true)
            .map_err(|e| PipelineError::inference("classifier", format!("Tokenization failed: {e}")))?;

        let rows: Vec<Vec<i64>> = encodings
            .iter()
            .map(|e| fit_to_length(e.get_ids(), self.max_text_length))
            .collect();
        Ok(pad_rows(&rows, self.pad_id))
    }
}

/// Truncate to `max_len` ids, replacing the last kept id with the sequence's
/// final (end-of-text) id.
fn fit_to_length(ids: &[u32], max_len: usize) -> Vec<i64> {
    let max_len = max_len.max(1);
    if ids.len() <= max_len {
        return ids.iter().map(|&id| id as i64).collect();
    }
    let mut kept: Vec<i64> = ids[..max_len - 1].iter().map(|&id| id as i64).collect();
    if let Some(&last) = ids.last() {
        kept.push(last as i64);
    }
    kept
}

/// Right-pad rows to the longest one. Returns `(ids, mask, seq_len)` row-major.
fn pad_rows(rows: &[Vec<i64>], pad_id: i64) -> (Vec<i64>, Vec<i64>, usize) {
    let seq_len = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);
    let mut input_ids = vec![pad_id; rows.len() * seq_len];
    let mut attention_mask = vec![0i64; rows.len() * seq_len];
    for (i, row) in rows.iter().enumerate() {
        for (j, &id) in row.iter().enumerate() {
            input_ids[i * seq_len + j] = id;
            attention_mask[i * seq_len + j] = 1;
        }
    }
    (input_ids, attention_mask, seq_len)
}

/// Required tensor names the model does not declare.
fn missing_names<'a>(declared: &[&str], required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|name| !declared.contains(name))
        .collect()
}

impl ZeroShotScorer for ClipScorer {
    fn score(&self, image: &DynamicImage, labels: &[&str]) -> PipelineResult<Vec<f32>> {
        if labels.is_empty() {
            return Ok(vec![]);
        }

        let (input_ids, attention_mask, seq_len) = self.tokenize(labels)?;
        let text_shape = vec![labels.len() as i64, seq_len as i64];

        let pixels = preprocess(image, self.image_size);
        let pixel_shape: Vec<i64> = pixels.shape().iter().map(|&d| d as i64).collect();
        let pixel_data: Vec<f32> = pixels.iter().copied().collect();

        let tensor_err = |e: ort::Error| {
            PipelineError::inference("classifier", format!("Failed to create input tensor: {e}"))
        };
        let ids_value = Value::from_array((text_shape.clone(), input_ids)).map_err(tensor_err)?;
        let mask_value = Value::from_array((text_shape, attention_mask)).map_err(tensor_err)?;
        let pixel_value = Value::from_array((pixel_shape, pixel_data)).map_err(tensor_err)?;

        let inputs = ort::inputs![
            INPUT_IDS => ids_value,
            ATTENTION_MASK => mask_value,
            PIXEL_VALUES => pixel_value
        ];

        let mut session = self.session.lock().map_err(|e| {
            PipelineError::inference("classifier", format!("Session lock poisoned: {e}"))
        })?;

        let outputs = session.run(inputs).map_err(|e| {
            PipelineError::inference("classifier", format!("ONNX inference failed: {e}"))
        })?;

        let logits = outputs
            .iter()
            .find(|(name, _)| *name == LOGITS_OUTPUT)
            .ok_or_else(|| {
                PipelineError::inference("classifier", format!("Model did not produce {LOGITS_OUTPUT}"))
            })?;

        let (_shape, data) = logits.1.try_extract_tensor::<f32>().map_err(|e| {
            PipelineError::inference("classifier", format!("Failed to extract logits: {e}"))
        })?;

        if data.len() != labels.len() {
            return Err(PipelineError::inference(
                "classifier",
                format!("expected {} logits, got {}", labels.len(), data.len()),
            ));
        }

        Ok(softmax(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_model_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClipScorer::load(&ClassifierConfig::default(), dir.path())
            .err()
            .unwrap();
        match err {
            PipelineError::ModelUnavailable { path, .. } => {
                assert!(path.ends_with(MODEL_RELATIVE_PATH));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_truncation_keeps_end_of_text() {
        // 49406 / 49407 are CLIP's start / end-of-text ids.
        let ids = [49406, 1, 2, 3, 4, 5, 49407];
        assert_eq!(fit_to_length(&ids, 4), vec![49406, 1, 2, 49407]);
        assert_eq!(fit_to_length(&ids, 7), vec![49406, 1, 2, 3, 4, 5, 49407]);
        assert_eq!(fit_to_length(&ids, 0), vec![49407]);
    }

    #[test]
    fn test_pad_rows_builds_mask() {
        let rows = vec![vec![7, 8, 9], vec![7, 9]];
        let (ids, mask, seq_len) = pad_rows(&rows, 0);
        assert_eq!(seq_len, 3);
        assert_eq!(ids, vec![7, 8, 9, 7, 9, 0]);
        assert_eq!(mask, vec![1, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn test_missing_names_reports_absent_tensors() {
        let required = [INPUT_IDS, ATTENTION_MASK, PIXEL_VALUES];
        assert!(missing_names(&["pixel_values", "input_ids", "attention_mask"], &required).is_empty());
        assert_eq!(missing_names(&["logits"], &[LOGITS_OUTPUT]), vec!["logits_per_image"]);
        assert_eq!(
            missing_names(&["input_ids", "pixel_values"], &required),
            vec!["attention_mask"]
        );
    }

    #[test]
    fn test_model_exists_requires_both_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!ClipScorer::model_exists(dir.path()));
        std::fs::create_dir_all(dir.path().join("onnx")).unwrap();
        std::fs::write(dir.path().join(MODEL_RELATIVE_PATH), b"").unwrap();
        assert!(!ClipScorer::model_exists(dir.path()));
        std::fs::write(dir.path().join(TOKENIZER_FILENAME), b"{}").unwrap();
        assert!(ClipScorer::model_exists(dir.path()));
    }
}
