//! Zero-shot multi-label attribute classification.

use std::sync::Arc;

use image::DynamicImage;

use crate::error::{PipelineError, PipelineResult};

/// Scores an image against a set of free-text labels.
///
/// Returns one probability per label, in label order. The probabilities are
/// normalized over the candidate set, so they sum to 1.
pub trait ZeroShotScorer: Send + Sync {
    fn score(&self, image: &DynamicImage, labels: &[&str]) -> PipelineResult<Vec<f32>>;
}

/// Accepts every candidate label whose probability clears a threshold.
#[derive(Clone)]
pub struct AttributeClassifier {
    scorer: Arc<dyn ZeroShotScorer>,
    threshold: f32,
}

impl AttributeClassifier {
    pub fn new(scorer: Arc<dyn ZeroShotScorer>, threshold: f32) -> Self {
        Self { scorer, threshold }
    }

    /// Acceptance threshold used by [`classify`](Self::classify).
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Labels accepted at the configured threshold, in candidate order.
    pub fn classify(&self, image: &DynamicImage, labels: &[&str]) -> PipelineResult<Vec<String>> {
        self.classify_with_threshold(image, labels, self.threshold)
    }

    /// Labels with probability `>= threshold`, in candidate order.
    ///
    /// An empty candidate list returns an empty result without scoring.
    pub fn classify_with_threshold(
        &self,
        image: &DynamicImage,
        labels: &[&str],
        threshold: f32,
    ) -> PipelineResult<Vec<String>> {
        if labels.is_empty() {
            return Ok(vec![]);
        }

        let probs = self.scorer.score(image, labels)?;
        if probs.len() != labels.len() {
            return Err(PipelineError::inference(
                "classifier",
                format!("scorer returned {} scores for {} labels", probs.len(), labels.len()),
            ));
        }

        let accepted: Vec<String> = labels
            .iter()
            .zip(&probs)
            .filter(|(_, p)| **p >= threshold)
            .map(|(label, _)| label.to_string())
            .collect();

        tracing::trace!(
            "Accepted {}/{} labels at threshold {}",
            accepted.len(),
            labels.len(),
            threshold
        );
        Ok(accepted)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::math::softmax;

    /// Scores labels from fixed logits; unknown labels get a logit of 0.
    #[derive(Default)]
    pub(crate) struct FixedLogits {
        logits: HashMap<String, f32>,
        pub(crate) calls: AtomicUsize,
    }

    impl FixedLogits {
        pub(crate) fn new(pairs: &[(&str, f32)]) -> Self {
            Self {
                logits: pairs.iter().map(|(l, v)| (l.to_string(), *v)).collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ZeroShotScorer for FixedLogits {
        fn score(&self, _image: &DynamicImage, labels: &[&str]) -> PipelineResult<Vec<f32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let logits: Vec<f32> = labels
                .iter()
                .map(|l| self.logits.get(*l).copied().unwrap_or(0.0))
                .collect();
            Ok(softmax(&logits))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::testing::FixedLogits;
    use super::*;
    use image::RgbImage;

    fn image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::new(4, 4))
    }

    #[test]
    fn test_dominant_label_is_accepted() {
        let scorer = Arc::new(FixedLogits::new(&[("summer", 5.0)]));
        let classifier = AttributeClassifier::new(scorer, 0.5);
        let labels = ["spring", "summer", "fall", "winter"];
        assert_eq!(classifier.classify(&image(), &labels).unwrap(), vec!["summer"]);
    }

    #[test]
    fn test_uniform_scores_accept_nothing() {
        let scorer = Arc::new(FixedLogits::default());
        let classifier = AttributeClassifier::new(scorer, 0.5);
        let labels = ["slim", "regular", "loose", "oversized"];
        assert!(classifier.classify(&image(), &labels).unwrap().is_empty());
    }

    #[test]
    fn test_accepted_labels_keep_candidate_order() {
        // Two labels at exactly 0.5 each: both clear the threshold, in input order.
        let scorer = Arc::new(FixedLogits::default());
        let classifier = AttributeClassifier::new(scorer, 0.5);
        let labels = ["tops", "bottoms"];
        assert_eq!(
            classifier.classify(&image(), &labels).unwrap(),
            vec!["tops", "bottoms"]
        );
        assert_eq!(
            classifier.classify(&image(), &["bottoms", "tops"]).unwrap(),
            vec!["bottoms", "tops"]
        );
    }

    #[test]
    fn test_empty_candidates_skip_scoring() {
        let scorer = Arc::new(FixedLogits::default());
        let classifier = AttributeClassifier::new(scorer.clone(), 0.5);
        assert!(classifier.classify(&image(), &[]).unwrap().is_empty());
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_raising_threshold_never_grows_result() {
        let scorer = Arc::new(FixedLogits::new(&[
            ("casual", 2.0),
            ("formal", 1.5),
            ("sporty", 1.0),
            ("chic", -1.0),
        ]));
        let classifier = AttributeClassifier::new(scorer, 0.5);
        let labels = ["casual", "formal", "sporty", "chic"];

        let mut previous = classifier
            .classify_with_threshold(&image(), &labels, 0.0)
            .unwrap();
        assert_eq!(previous.len(), labels.len());
        for step in 1..=20 {
            let t = step as f32 * 0.05;
            let current = classifier
                .classify_with_threshold(&image(), &labels, t)
                .unwrap();
            assert!(current.iter().all(|l| previous.contains(l)));
            previous = current;
        }
    }

    struct Mismatched;

    impl ZeroShotScorer for Mismatched {
        fn score(&self, _image: &DynamicImage, _labels: &[&str]) -> PipelineResult<Vec<f32>> {
            Ok(vec![1.0])
        }
    }

    #[test]
    fn test_scorer_length_mismatch_is_error() {
        let classifier = AttributeClassifier::new(Arc::new(Mismatched), 0.5);
        assert!(classifier.classify(&image(), &["a", "b"]).is_err());
    }
}
