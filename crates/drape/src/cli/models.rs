//! The `drape models` command.
//!
//! Model files are provided by the operator; this only reports on them.

use clap::{Args, Subcommand};
use drape_core::models::{expected_artifacts, ModelArtifact};
use drape_core::Config;

#[derive(Args, Debug)]
pub struct ModelsArgs {
    #[command(subcommand)]
    pub command: ModelsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ModelsCommand {
    /// List every model file and whether it is present
    Status,

    /// Print the model directory
    Path,
}

pub fn execute(args: ModelsArgs, config: &Config) -> anyhow::Result<()> {
    match args.command {
        ModelsCommand::Status => {
            let artifacts = expected_artifacts(config);
            println!("Model directory: {}", config.model_dir().display());
            for artifact in &artifacts {
                println!("{}", status_line(artifact));
            }

            let missing = artifacts.iter().filter(|a| !a.present).count();
            if missing > 0 {
                tracing::warn!("{} of {} model files missing", missing, artifacts.len());
                anyhow::bail!("{missing} model file(s) missing; `drape segment` will not start");
            }
            println!("All models present.");
        }

        ModelsCommand::Path => {
            println!("{}", config.model_dir().display());
        }
    }

    Ok(())
}

fn status_line(artifact: &ModelArtifact) -> String {
    let mark = if artifact.present { "ok     " } else { "missing" };
    format!("  [{mark}] {:<22} {}", artifact.name, artifact.path.display())
}
