//! # Metadata — Rewrite the metadata document.
//!
//! Stamps `metadata.json` with the current date, the number of jurisdictions
//! in the dataset, and the provenance string.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use regatlas_core::AtlasMetadata;

use crate::{load_dataset, metadata_path};

/// Metadata subcommand arguments.
#[derive(Args, Debug)]
pub struct MetadataArgs {}

/// Execute the metadata subcommand.
pub fn run_metadata(_args: &MetadataArgs, data_dir: &Path) -> Result<u8> {
    let dataset = load_dataset(data_dir).context("loading dataset")?;
    let metadata = AtlasMetadata::for_dataset(&dataset);

    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("creating {}", data_dir.display()))?;
    let path = metadata_path(data_dir);
    let json = serde_json::to_string_pretty(&metadata)?;
    std::fs::write(&path, json + "\n").with_context(|| format!("writing {}", path.display()))?;

    println!(
        "Updated metadata: {} countries, last updated {}",
        metadata.total_countries, metadata.last_updated
    );
    Ok(0)
}
