//! # Atlas Metadata
//!
//! The small sidecar document (`data/metadata.json`) that carries the
//! dataset-wide "last updated" indicator and basic statistics. Fetched once
//! at startup; when the fetch fails, the indicator falls back to the current
//! UTC date so the UI always has something to show.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::dataset::CountryDataset;
use crate::error::AtlasError;

/// Dataset-wide metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasMetadata {
    /// Date the dataset was last updated (YYYY-MM-DD).
    pub last_updated: String,

    /// Number of jurisdictions in the dataset.
    #[serde(default)]
    pub total_countries: usize,

    /// Human-readable provenance string.
    #[serde(default)]
    pub data_source: String,
}

impl AtlasMetadata {
    /// Parse metadata from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fallback metadata carrying the current UTC date.
    pub fn fallback_today() -> Self {
        Self {
            last_updated: today(),
            total_countries: 0,
            data_source: String::new(),
        }
    }

    /// Fresh metadata describing the given dataset, stamped with today's
    /// date. Used by the `regatlas metadata` curation command.
    pub fn for_dataset(dataset: &CountryDataset) -> Self {
        Self {
            last_updated: today(),
            total_countries: dataset.len(),
            data_source: "Automated periodic updates and manual curation".to_string(),
        }
    }
}

/// Current UTC date as YYYY-MM-DD.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
