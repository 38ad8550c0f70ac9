//! # regatlas CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use regatlas_cli::fetch::{run_fetch, FetchArgs};
use regatlas_cli::metadata::{run_metadata, MetadataArgs};
use regatlas_cli::render::{run_render, RenderArgs};
use regatlas_cli::validate::{run_validate, ValidateArgs};

/// Regulation Atlas toolchain.
///
/// Refreshes the curated country dataset, stamps metadata, validates the
/// documents the serving layer reads, and renders panel HTML for review.
#[derive(Parser, Debug)]
#[command(name = "regatlas", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory holding the atlas documents.
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Refresh the curated country dataset and per-country files.
    Fetch(FetchArgs),

    /// Rewrite the metadata document with current statistics.
    Metadata(MetadataArgs),

    /// Check dataset structural invariants.
    Validate(ValidateArgs),

    /// Render one jurisdiction's panel HTML to stdout.
    Render(RenderArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Fetch(args) => run_fetch(&args, &cli.data_dir),
        Commands::Metadata(args) => run_metadata(&args, &cli.data_dir),
        Commands::Validate(args) => run_validate(&args, &cli.data_dir),
        Commands::Render(args) => run_render(&args, &cli.data_dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
