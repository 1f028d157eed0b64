//! The `drape segment` command.
//!
//! Models are loaded once and shared by every photo. Each photo is one
//! blocking invocation on tokio's blocking pool; a semaphore caps how many
//! run at the same time.
//!
//! Each model session sits behind a mutex, so forward passes on the same
//! model run one at a time. With `--parallel` above 1 only decoding, color
//! clustering and JPEG encoding overlap across photos.

use std::io::{self, BufWriter, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Args, ValueEnum};
use drape_core::pipeline::{DiscoveredPhoto, PhotoDiscovery};
use drape_core::{
    ArtifactWriter, Config, GarmentPipeline, LoadedModels, OutputFormat, OutputWriter,
    ReportSummary, SegmentationReport,
};
use tokio::sync::Semaphore;

/// Input path meaning "read one photo from stdin".
const STDIN_INPUT: &str = "-";

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SummaryFormat {
    /// A single JSON array of photo summaries
    Json,
    /// One photo summary per line
    Jsonl,
}

impl From<SummaryFormat> for OutputFormat {
    fn from(format: SummaryFormat) -> Self {
        match format {
            SummaryFormat::Json => OutputFormat::Json,
            SummaryFormat::Jsonl => OutputFormat::JsonLines,
        }
    }
}

#[derive(Args, Debug)]
pub struct SegmentArgs {
    /// Photo file, directory of photos, or `-` to read one photo from stdin
    #[arg(required = true)]
    pub input: String,

    /// Directory receiving the garment images and metadata files
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Summary format on stdout [default: from config]
    #[arg(short, long, value_enum)]
    pub format: Option<SummaryFormat>,

    /// Photos processed at the same time [default: from config]
    ///
    /// Model inference is still serialized per model; decoding, color
    /// extraction and encoding are what run side by side.
    #[arg(short, long)]
    pub parallel: Option<usize>,

    /// Acceptance threshold for attribute labels, in [0, 1]
    #[arg(short, long)]
    pub threshold: Option<f32>,

    /// Embed base64 garment images in the summaries
    #[arg(long)]
    pub include_image_data: bool,
}

/// Settings resolved from flags with config fallbacks.
#[derive(Debug)]
struct RunSettings {
    format: OutputFormat,
    parallel: usize,
    include_image_data: bool,
    pretty: bool,
}

impl RunSettings {
    fn resolve(args: &SegmentArgs, config: &mut Config) -> anyhow::Result<Self> {
        if let Some(threshold) = args.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                anyhow::bail!("--threshold must lie in [0, 1], got {threshold}");
            }
            config.classifier.threshold = threshold;
        }

        let parallel = args.parallel.unwrap_or(config.processing.parallel_workers);
        if parallel == 0 {
            anyhow::bail!("--parallel must be at least 1");
        }

        let format = match args.format {
            Some(format) => format.into(),
            None => OutputFormat::parse(&config.output.format).unwrap_or_else(|| {
                tracing::warn!(
                    "Unknown output format {:?} in config, using json",
                    config.output.format
                );
                OutputFormat::Json
            }),
        };

        Ok(Self {
            format,
            parallel,
            include_image_data: args.include_image_data || config.output.include_image_data,
            pretty: config.output.pretty,
        })
    }
}

pub async fn execute(args: SegmentArgs, mut config: Config) -> anyhow::Result<()> {
    let settings = RunSettings::resolve(&args, &mut config)?;
    let pipeline = Arc::new(build_pipeline(config.clone()).await?);
    let artifacts = args.output.as_ref().map(ArtifactWriter::new);

    if args.input == STDIN_INPUT {
        return segment_stdin(pipeline, artifacts.as_ref(), &settings).await;
    }

    let input = PathBuf::from(&args.input);
    if !input.exists() {
        anyhow::bail!("Input does not exist: {}", input.display());
    }

    let mut discovery = PhotoDiscovery::new(config.processing.clone());
    if let Some(dir) = &args.output {
        discovery = discovery.excluding(dir);
    }
    let photos = discovery.discover(&input);
    if photos.is_empty() {
        anyhow::bail!("No supported photos found at {}", input.display());
    }

    let show_progress = input.is_dir();
    segment_photos(pipeline, photos, artifacts.as_ref(), &settings, show_progress).await
}

/// Load both models on the blocking pool and wrap them in a pipeline.
async fn build_pipeline(config: Config) -> anyhow::Result<GarmentPipeline> {
    let start = Instant::now();
    let pipeline = tokio::task::spawn_blocking(move || -> anyhow::Result<GarmentPipeline> {
        let models = LoadedModels::load(&config).context(
            "Could not load models. Run `drape models status` to see which files are missing",
        )?;
        Ok(GarmentPipeline::new(&config, Arc::new(models))?)
    })
    .await??;
    tracing::info!("Models loaded in {:?}", start.elapsed());
    Ok(pipeline)
}

async fn segment_stdin(
    pipeline: Arc<GarmentPipeline>,
    artifacts: Option<&ArtifactWriter>,
    settings: &RunSettings,
) -> anyhow::Result<()> {
    let report = tokio::task::spawn_blocking(move || -> anyhow::Result<SegmentationReport> {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .context("Failed to read photo from stdin")?;
        Ok(pipeline.process_bytes(&bytes)?)
    })
    .await??;

    let mut stats = RunStats::default();
    stats.record(&report);
    if let Some(writer) = artifacts {
        writer.write_report(&report)?;
    }

    let summary =
        ReportSummary::from_report(&report, Some(STDIN_INPUT), settings.include_image_data);
    let mut out = stdout_writer(settings);
    out.write(&summary)?;
    out.flush()?;

    stats.log();
    Ok(())
}

async fn segment_photos(
    pipeline: Arc<GarmentPipeline>,
    photos: Vec<DiscoveredPhoto>,
    artifacts: Option<&ArtifactWriter>,
    settings: &RunSettings,
    show_progress: bool,
) -> anyhow::Result<()> {
    let total_bytes = PhotoDiscovery::total_size(&photos);
    tracing::info!(
        "Segmenting {} photo(s), {:.1} MB, {} at a time",
        photos.len(),
        total_bytes as f64 / (1024.0 * 1024.0),
        settings.parallel
    );

    let semaphore = Arc::new(Semaphore::new(settings.parallel));
    let progress = show_progress.then(|| create_progress_bar(photos.len() as u64));
    let start = Instant::now();

    // Spawn everything up front; the semaphore holds back all but `parallel`.
    let tasks: Vec<(PathBuf, tokio::task::JoinHandle<anyhow::Result<SegmentationReport>>)> =
        photos
            .into_iter()
            .map(|photo| {
                let semaphore = Arc::clone(&semaphore);
                let pipeline = Arc::clone(&pipeline);
                let path = photo.path.clone();
                let handle = tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await?;
                    tokio::task::spawn_blocking(move || segment_file(&pipeline, &photo.path))
                        .await?
                });
                (path, handle)
            })
            .collect();

    let mut out = stdout_writer(settings);
    let mut summaries = Vec::new();
    let mut stats = RunStats::default();

    // Awaiting in spawn order keeps the summaries in discovery order.
    for (path, handle) in tasks {
        let source = path.display().to_string();
        match handle.await? {
            Ok(report) => {
                stats.record(&report);
                if let Some(writer) = artifacts {
                    writer
                        .write_report(&report)
                        .with_context(|| format!("Failed to write artifacts for {source}"))?;
                }

                let summary =
                    ReportSummary::from_report(&report, Some(&source), settings.include_image_data);
                match settings.format {
                    OutputFormat::JsonLines => out.write(&summary)?,
                    OutputFormat::Json => summaries.push(summary),
                }
            }
            Err(e) => {
                stats.photos_failed += 1;
                tracing::error!("Failed: {} - {:#}", source, e);
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
            pb.set_message(rate_message(stats.photos_done(), start.elapsed()));
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message(rate_message(stats.photos_done(), start.elapsed()));
    }

    if settings.format == OutputFormat::Json {
        out.write_all(&summaries)?;
    }
    out.flush()?;

    stats.log();
    if stats.photos_ok == 0 {
        anyhow::bail!("No photo could be segmented");
    }
    Ok(())
}

fn stdout_writer(settings: &RunSettings) -> OutputWriter<BufWriter<io::Stdout>> {
    OutputWriter::new(
        BufWriter::new(io::stdout()),
        settings.format,
        settings.pretty,
    )
}

fn segment_file(pipeline: &GarmentPipeline, path: &Path) -> anyhow::Result<SegmentationReport> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let report = pipeline.process_bytes(&bytes)?;
    for failure in &report.failures {
        tracing::warn!(
            "{}: garment class {} skipped: {}",
            path.display(),
            failure.class_id,
            failure.error
        );
    }
    Ok(report)
}

/// Running totals for the end-of-run summary line.
#[derive(Debug, Default, PartialEq, Eq)]
struct RunStats {
    photos_ok: usize,
    photos_failed: usize,
    garments: usize,
    garment_failures: usize,
}

impl RunStats {
    fn record(&mut self, report: &SegmentationReport) {
        self.photos_ok += 1;
        self.garments += report.garments.len();
        self.garment_failures += report.failures.len();
    }

    fn photos_done(&self) -> usize {
        self.photos_ok + self.photos_failed
    }

    fn log(&self) {
        tracing::info!(
            "Done: {} photo(s) segmented, {} failed; {} garment(s) written, {} skipped",
            self.photos_ok,
            self.photos_failed,
            self.garments,
            self.garment_failures
        );
    }
}

fn rate_message(done: usize, elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        format!("{:.2} photos/sec", done as f64 / secs)
    } else {
        String::new()
    }
}

fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
    ) {
        pb.set_style(style.progress_chars("##-"));
    }
    pb.set_message("loading...");
    pb
}
