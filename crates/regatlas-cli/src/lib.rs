//! # regatlas-cli — Regulation Atlas Toolchain
//!
//! Replaces the Python update scripts (`fetch_regulations.py`,
//! `update_metadata.py`) with a structured clap-based CLI.
//!
//! ## Subcommands
//!
//! - `fetch` — Refresh the curated country dataset and per-country files
//! - `metadata` — Rewrite the metadata document with current statistics
//! - `validate` — Check dataset structural invariants
//! - `render` — Render one jurisdiction's panel HTML to stdout
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the domain crates — curation content
//!   lives in `fetch::curated`, rendering in `regatlas-panel`.

pub mod fetch;
pub mod metadata;
pub mod render;
pub mod validate;

use std::path::{Path, PathBuf};

use regatlas_core::{AtlasError, CountryDataset};

/// Path of the dataset document inside the data directory.
pub fn countries_path(data_dir: &Path) -> PathBuf {
    data_dir.join("countries.json")
}

/// Path of the metadata document inside the data directory.
pub fn metadata_path(data_dir: &Path) -> PathBuf {
    data_dir.join("metadata.json")
}

/// Load the dataset document, or an empty dataset when none exists yet.
pub fn load_dataset(data_dir: &Path) -> Result<CountryDataset, AtlasError> {
    let path = countries_path(data_dir);
    if !path.exists() {
        tracing::info!(path = %path.display(), "no existing dataset; starting empty");
        return Ok(CountryDataset::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    let dataset = CountryDataset::from_json(&raw)?;
    tracing::info!(countries = dataset.len(), "loaded existing dataset");
    Ok(dataset)
}

/// Write the dataset document with stable pretty formatting.
pub fn save_dataset(data_dir: &Path, dataset: &CountryDataset) -> Result<(), AtlasError> {
    std::fs::create_dir_all(data_dir)?;
    let json = serde_json::to_string_pretty(dataset)?;
    std::fs::write(countries_path(data_dir), json + "\n")?;
    Ok(())
}
