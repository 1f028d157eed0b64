//! Packaging pipeline results: summaries on a stream, artifacts on disk.
//!
//! Every garment becomes two sibling files, `clothing_{class}_{request}.jpg`
//! and `clothing_{class}_{request}.json`; the JSON file is the bare metadata
//! record. Summaries describing a whole photo are written as JSON or JSONL.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::types::{GarmentRegion, MetadataRecord, SegmentationReport};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single JSON document
    Json,
    /// One JSON object per line
    JsonLines,
}

impl OutputFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "jsonl" | "jsonlines" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }
}

/// Streams serializable records as JSON or JSONL.
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    pretty: bool,
    items_written: usize,
}

impl<W: Write> OutputWriter<W> {
    /// `pretty` only affects [`OutputFormat::Json`]; JSONL is always one line per record.
    pub fn new(writer: W, format: OutputFormat, pretty: bool) -> Self {
        Self {
            writer,
            format,
            pretty,
            items_written: 0,
        }
    }

    fn write_value<T: Serialize + ?Sized>(&mut self, value: &T, pretty: bool) -> io::Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut self.writer, value).map_err(io::Error::other)?;
        } else {
            serde_json::to_writer(&mut self.writer, value).map_err(io::Error::other)?;
        }
        writeln!(self.writer)
    }

    /// Write one record.
    pub fn write<T: Serialize>(&mut self, item: &T) -> io::Result<()> {
        let pretty = self.pretty && self.format == OutputFormat::Json;
        self.write_value(item, pretty)?;
        self.items_written += 1;
        Ok(())
    }

    /// Write a batch: a JSON array, or one line per record for JSONL.
    pub fn write_all<T: Serialize>(&mut self, items: &[T]) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                self.write_value(items, self.pretty)?;
                self.items_written += items.len();
            }
            OutputFormat::JsonLines => {
                for item in items {
                    self.write(item)?;
                }
            }
        }
        Ok(())
    }

    pub fn items_written(&self) -> usize {
        self.items_written
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// One garment as reported to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentSummary {
    pub filename: String,
    pub class_id: u8,
    pub pixel_count: usize,
    pub metadata: MetadataRecord,
    /// Base64 of the encoded garment, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl GarmentSummary {
    pub fn from_garment(garment: &GarmentRegion, include_image_data: bool) -> Self {
        Self {
            filename: garment.filename.clone(),
            class_id: garment.class_id,
            pixel_count: garment.pixel_count,
            metadata: garment.metadata.clone(),
            image: include_image_data.then(|| STANDARD.encode(&garment.encoded)),
        }
    }
}

/// A garment that failed, with its error rendered as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureSummary {
    pub class_id: u8,
    pub error: String,
}

/// Everything produced for one photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Where the photo came from (file path or `-` for stdin)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub request_id: String,
    pub width: u32,
    pub height: u32,
    pub garments: Vec<GarmentSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailureSummary>,
}

impl ReportSummary {
    pub fn from_report(
        report: &SegmentationReport,
        source: Option<&str>,
        include_image_data: bool,
    ) -> Self {
        Self {
            source: source.map(str::to_string),
            request_id: report.request_id.clone(),
            width: report.width,
            height: report.height,
            garments: report
                .garments
                .iter()
                .map(|g| GarmentSummary::from_garment(g, include_image_data))
                .collect(),
            failures: report
                .failures
                .iter()
                .map(|f| FailureSummary {
                    class_id: f.class_id,
                    error: f.error.to_string(),
                })
                .collect(),
        }
    }
}

/// Writes garment images and their metadata files into a directory.
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one garment's image and metadata; returns both paths.
    pub fn write_garment(&self, garment: &GarmentRegion) -> io::Result<(PathBuf, PathBuf)> {
        fs::create_dir_all(&self.dir)?;

        let image_path = self.dir.join(&garment.filename);
        fs::write(&image_path, &garment.encoded)?;

        let metadata_path = self.dir.join(garment.metadata_filename());
        let json = serde_json::to_vec(&garment.metadata).map_err(io::Error::other)?;
        fs::write(&metadata_path, json)?;

        Ok((image_path, metadata_path))
    }

    /// Write every garment of a report, in report order.
    pub fn write_report(&self, report: &SegmentationReport) -> io::Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(report.garments.len() * 2);
        for garment in &report.garments {
            let (image, metadata) = self.write_garment(garment)?;
            written.push(image);
            written.push(metadata);
        }
        tracing::debug!(
            "Wrote {} artifacts for request {} to {:?}",
            written.len(),
            report.request_id,
            self.dir
        );
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::types::GarmentFailure;
    use image::RgbaImage;

    fn garment(class_id: u8) -> GarmentRegion {
        let mut metadata = MetadataRecord::new();
        metadata.insert("categories", vec!["tops".to_string()]);
        metadata.insert("colors", vec!["crimson".to_string()]);
        GarmentRegion {
            class_id,
            filename: format!("clothing_{class_id}_req.jpg"),
            image: RgbaImage::new(2, 2),
            encoded: vec![0xFF, 0xD8, 0xFF, 0xD9],
            metadata,
            pixel_count: 4,
        }
    }

    fn report() -> SegmentationReport {
        SegmentationReport {
            request_id: "req".to_string(),
            width: 2,
            height: 2,
            garments: vec![garment(1), garment(3)],
            failures: vec![GarmentFailure {
                class_id: 2,
                error: PipelineError::ColorDetection {
                    message: "no opaque pixels".to_string(),
                },
            }],
        }
    }

    #[test]
    fn test_write_json_single() {
        let mut buffer = Vec::new();
        let mut writer = OutputWriter::new(&mut buffer, OutputFormat::Json, false);
        writer.write(&garment(1).metadata).unwrap();
        assert_eq!(writer.items_written(), 1);

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "{\"categories\":[\"tops\"],\"colors\":[\"crimson\"]}\n");
    }

    #[test]
    fn test_write_all_jsonl_one_line_each() {
        let summary = ReportSummary::from_report(&report(), None, false);
        let mut buffer = Vec::new();
        let mut writer = OutputWriter::new(&mut buffer, OutputFormat::JsonLines, true);
        writer.write_all(&summary.garments).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_write_all_json_array() {
        let mut buffer = Vec::new();
        let mut writer = OutputWriter::new(&mut buffer, OutputFormat::Json, false);
        writer.write_all(&[1, 2, 3]).unwrap();
        assert_eq!(writer.items_written(), 3);
        assert_eq!(String::from_utf8(buffer).unwrap(), "[1,2,3]\n");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("JSONL"), Some(OutputFormat::JsonLines));
        assert_eq!(OutputFormat::parse("ndjson"), Some(OutputFormat::JsonLines));
        assert_eq!(OutputFormat::parse("xml"), None);
    }

    #[test]
    fn test_summary_includes_image_only_on_request() {
        let without = GarmentSummary::from_garment(&garment(1), false);
        assert!(without.image.is_none());
        let json = serde_json::to_string(&without).unwrap();
        assert!(!json.contains("\"image\""));

        let with = GarmentSummary::from_garment(&garment(1), true);
        assert_eq!(with.image.as_deref(), Some("/9j/2Q=="));
    }

    #[test]
    fn test_report_summary_carries_failures() {
        let summary = ReportSummary::from_report(&report(), Some("look.jpg"), false);
        assert_eq!(summary.source.as_deref(), Some("look.jpg"));
        assert_eq!(summary.garments.len(), 2);
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].error.contains("no opaque pixels"));
    }

    #[test]
    fn test_artifacts_are_sibling_files() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::new(dir.path().join("out"));
        let written = writer.write_report(&report()).unwrap();
        assert_eq!(written.len(), 4);

        let image = std::fs::read(dir.path().join("out/clothing_1_req.jpg")).unwrap();
        assert_eq!(image, vec![0xFF, 0xD8, 0xFF, 0xD9]);

        let json = std::fs::read_to_string(dir.path().join("out/clothing_3_req.json")).unwrap();
        let metadata: MetadataRecord = serde_json::from_str(&json).unwrap();
        assert!(metadata.contains("colors", "crimson"));
    }
}
