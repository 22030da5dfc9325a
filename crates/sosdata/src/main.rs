// crates/sosdata/src/main.rs

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sosdata_core::pipeline;

/// Merge yearly SOS cleanup spreadsheets into one canonical dataset.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Normalize every sheet in a directory and write the merged CSV there.
    Merge {
        /// Path to directory containing SOS csv exports.
        #[arg(short, long)]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Merge { dir } => {
            let merged = pipeline::merge_directory(&dir)?;
            let output = pipeline::write_merged(&merged, &dir)?;
            info!(
                rows = merged.height(),
                columns = merged.width(),
                output = %output.display(),
                "merged dataset written"
            );
        }
    }

    Ok(())
}
