//! Drape CLI - split photos of people into isolated, described garments.
//!
//! Every garment found in a photo is written as an alpha-matted JPEG next to
//! a JSON file listing its season, occasion, category, type, colors, style,
//! fit and category-specific details.
//!
//! # Usage
//!
//! ```bash
//! # Segment a single photo, artifacts into ./out
//! drape segment look.jpg -o ./out
//!
//! # Segment a directory, one JSON summary per line on stdout
//! drape segment ./looks/ --format jsonl --parallel 4
//!
//! # Check that the models are in place
//! drape models status
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Drape - garment segmentation and zero-shot attribute tagging.
#[derive(Parser, Debug)]
#[command(name = "drape")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Segment photos into garments and describe each one
    Segment(cli::segment::SegmentArgs),

    /// Inspect the model files the pipeline needs
    Models(cli::models::ModelsArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging is not up yet, so config problems go straight to stderr.
    let config = match drape_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: could not load config: {e}\n  \
                 Falling back to defaults. `drape config path` shows where the file is expected."
            );
            drape_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Drape v{}", drape_core::VERSION);

    match cli.command {
        Commands::Segment(args) => cli::segment::execute(args, config).await,
        Commands::Models(args) => cli::models::execute(args, &config),
        Commands::Config(args) => cli::config::execute(args),
    }
}
