//! End-to-end pipeline tests with deterministic stand-in models.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use drape_core::attributes::AttributeTaxonomy;
use drape_core::output::ArtifactWriter;
use drape_core::{
    Config, DenseModel, GarmentPipeline, LoadedModels, MetadataRecord, PipelineError,
    PipelineResult, SegmentationEngine, ZeroShotScorer,
};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use ndarray::Array4;

const CRIMSON: Rgb<u8> = Rgb([220, 20, 60]);
const NAVY: Rgb<u8> = Rgb([20, 20, 200]);
const GRAY: Rgb<u8> = Rgb([128, 128, 128]);

/// Class 1 where red dominates, class 2 where blue dominates, else background.
struct ChannelSegmenter;

impl DenseModel for ChannelSegmenter {
    fn forward(&self, input: &Array4<f32>) -> PipelineResult<Array4<f32>> {
        let (h, w) = (input.shape()[2], input.shape()[3]);
        let mut scores = Array4::<f32>::zeros((1, 4, h, w));
        for y in 0..h {
            for x in 0..w {
                let (r, b) = (input[[0, 0, y, x]], input[[0, 2, y, x]]);
                let class = if r > 0.5 && b < 0.0 {
                    1
                } else if b > 0.5 && r < 0.0 {
                    2
                } else {
                    0
                };
                scores[[0, class, y, x]] = 8.0;
            }
        }
        Ok(scores)
    }
}

/// Fixed logits per label; fails on garments whose opaque pixels are mostly blue.
struct StubScorer {
    logits: HashMap<String, f32>,
}

impl StubScorer {
    fn new() -> Self {
        let logits: [(&str, f32); 8] = [
            ("summer", 4.0),
            ("daily", 5.0),
            ("tops", 4.0),
            ("t-shirt", 6.0),
            ("casual", 6.0),
            ("regular", 3.0),
            ("round neckline", 4.0),
            ("short sleeve", 4.0),
        ];
        Self {
            logits: logits
                .into_iter()
                .map(|(label, logit)| (label.to_string(), logit))
                .collect(),
        }
    }
}

impl ZeroShotScorer for StubScorer {
    fn score(&self, image: &DynamicImage, labels: &[&str]) -> PipelineResult<Vec<f32>> {
        let rgba = image.to_rgba8();
        let blue = rgba
            .pixels()
            .filter(|p| p.0[3] == 255 && p.0[2] > p.0[0])
            .count();
        if blue > 0 {
            return Err(PipelineError::Inference {
                stage: "classifier".to_string(),
                message: "stub refuses blue garments".to_string(),
            });
        }

        let logits: Vec<f32> = labels
            .iter()
            .map(|l| self.logits.get(*l).copied().unwrap_or(0.0))
            .collect();
        let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let exps: Vec<f32> = logits.iter().map(|v| (v - max).exp()).collect();
        let sum: f32 = exps.iter().sum();
        Ok(exps.into_iter().map(|e| e / sum).collect())
    }
}

fn pipeline() -> GarmentPipeline {
    let config = Config::default();
    let engine = SegmentationEngine::with_model(&config.segmentation, Box::new(ChannelSegmenter));
    let models = LoadedModels::from_parts(engine, Arc::new(StubScorer::new()));
    GarmentPipeline::new(&config, Arc::new(models)).unwrap()
}

/// 768x768 gray photo with optional crimson and navy rectangles.
fn photo(crimson: bool, navy: bool) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(768, 768, |x, y| {
        if crimson && (100..300).contains(&x) && (200..500).contains(&y) {
            CRIMSON
        } else if navy && (400..600).contains(&x) && (100..250).contains(&y) {
            NAVY
        } else {
            GRAY
        }
    }))
}

fn encoded(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

fn png_bytes(image: &DynamicImage) -> Vec<u8> {
    encoded(image, ImageFormat::Png)
}

#[test]
fn test_single_garment_end_to_end() {
    let report = pipeline().process_image(&photo(true, false), "req-1").unwrap();

    assert_eq!((report.width, report.height), (768, 768));
    assert!(report.failures.is_empty());
    assert_eq!(report.garments.len(), 1);

    let garment = &report.garments[0];
    assert_eq!(garment.class_id, 1);
    assert_eq!(garment.filename, "clothing_1_req-1.jpg");
    assert_eq!(garment.metadata_filename(), "clothing_1_req-1.json");
    assert_eq!(garment.pixel_count, 200 * 300);

    for (x, y, p) in garment.image.enumerate_pixels() {
        let inside = (100..300).contains(&x) && (200..500).contains(&y);
        if inside {
            assert_eq!(p.0, [220, 20, 60, 255]);
        } else {
            assert_eq!(p.0, [0, 0, 0, 0]);
        }
    }

    let m = &garment.metadata;
    assert!(m.covers(AttributeTaxonomy::keys_for(true)));
    assert_eq!(m.get("categories").unwrap(), ["tops"]);
    assert_eq!(m.get("types").unwrap(), ["t-shirt"]);
    assert_eq!(m.get("colors").unwrap(), ["crimson", "crimson", "crimson"]);
    assert!(m.contains("styles", "casual"));
    assert!(m.get("waist_styles").is_none());

    let decoded = image::load_from_memory(&garment.encoded).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (768, 768));
}

#[test]
fn test_background_only_photo_yields_empty_report() {
    let report = pipeline().process_image(&photo(false, false), "req-2").unwrap();
    assert!(report.is_empty());
    assert!(report.garments.is_empty());
}

#[test]
fn test_repeated_invocations_are_identical() {
    let pipeline = pipeline();
    let img = photo(true, false);
    let a = pipeline.process_image(&img, "same").unwrap();
    let b = pipeline.process_image(&img, "same").unwrap();

    assert_eq!(a.garments.len(), b.garments.len());
    for (ga, gb) in a.garments.iter().zip(&b.garments) {
        assert_eq!(ga.filename, gb.filename);
        assert_eq!(ga.metadata, gb.metadata);
        assert_eq!(ga.image, gb.image);
        assert_eq!(ga.encoded, gb.encoded);
    }
}

#[test]
fn test_failed_garment_does_not_stop_siblings() {
    let report = pipeline().process_image(&photo(true, true), "req-3").unwrap();

    assert_eq!(report.garments.len(), 1);
    assert_eq!(report.garments[0].class_id, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].class_id, 2);
    assert!(matches!(
        report.failures[0].error,
        PipelineError::Inference { .. }
    ));
}

#[test]
fn test_process_bytes_assigns_fresh_request_ids() {
    let pipeline = pipeline();
    let bytes = png_bytes(&photo(true, false));
    let a = pipeline.process_bytes(&bytes).unwrap();
    let b = pipeline.process_bytes(&bytes).unwrap();

    assert_ne!(a.request_id, b.request_id);
    assert_eq!(a.request_id.len(), 36);
    assert_eq!(
        a.garments[0].filename,
        format!("clothing_1_{}.jpg", a.request_id)
    );
    assert_eq!(a.garments[0].metadata, b.garments[0].metadata);
}

#[test]
fn test_process_bytes_rejects_non_images() {
    let err = pipeline().process_bytes(b"definitely not a photo").unwrap_err();
    assert!(matches!(err, PipelineError::ImageDecode { .. }));
}

#[test]
fn test_process_bytes_accepts_pnm_and_qoi() {
    let pipeline = pipeline();
    for format in [ImageFormat::Pnm, ImageFormat::Qoi] {
        let report = pipeline
            .process_bytes(&encoded(&photo(true, false), format))
            .unwrap_or_else(|e| panic!("{format:?} rejected: {e}"));
        assert_eq!((report.width, report.height), (768, 768));
        assert_eq!(report.garments.len(), 1);
        assert_eq!(report.garments[0].pixel_count, 200 * 300);
    }
}

#[test]
fn test_photo_larger_than_working_resolution() {
    // Upsampling the 768 mask back to 1536 keeps the garment interior intact.
    let big = photo(true, false).resize_exact(1536, 1536, image::imageops::FilterType::Nearest);
    let report = pipeline().process_image(&big, "big").unwrap();
    let garment = &report.garments[0];
    assert_eq!(garment.image.dimensions(), (1536, 1536));
    assert_eq!(garment.image.get_pixel(400, 700).0, [220, 20, 60, 255]);
    assert_eq!(garment.image.get_pixel(10, 10).0, [0, 0, 0, 0]);
}

#[test]
fn test_artifacts_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let report = pipeline()
        .process_bytes(&png_bytes(&photo(true, false)))
        .unwrap();
    let written = ArtifactWriter::new(dir.path()).write_report(&report).unwrap();
    assert_eq!(written.len(), 2);

    let garment = &report.garments[0];
    let jpg = std::fs::read(dir.path().join(&garment.filename)).unwrap();
    assert_eq!(jpg, garment.encoded);

    let json = std::fs::read_to_string(dir.path().join(garment.metadata_filename())).unwrap();
    let metadata: MetadataRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(metadata, garment.metadata);
}
