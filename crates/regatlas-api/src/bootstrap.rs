//! # Startup Document Loading
//!
//! One asynchronous load each for the country-data document, the metadata
//! document, and the map asset. The loads are independent; each produces
//! process-wide immutable state once resolved.
//!
//! Failure handling follows the two-kind design:
//!
//! 1. Data or metadata fetch/parse failure → log a warning, substitute the
//!    fixed fallback (dataset wholesale, metadata as today's date), continue.
//! 2. Map-asset failure → no fallback map exists; the error is kept and
//!    served visibly on the map surface.

use std::time::Duration;

use regatlas_core::{AtlasMetadata, CountryDataset, FeatureCollection};

use crate::config::{ApiConfig, DocumentSource};
use crate::state::{AppState, MapAsset};

/// Resolve the full application state from configuration.
pub async fn load_state(config: &ApiConfig) -> AppState {
    let dataset = load_dataset(config).await;
    let metadata = load_metadata(config).await;
    let map = load_map(config).await;
    AppState::new(dataset, metadata, map)
}

/// Load the country dataset, substituting the fallback wholesale on any
/// fetch or parse failure.
pub async fn load_dataset(config: &ApiConfig) -> CountryDataset {
    match read_document(&config.data_source, config.fetch_timeout_secs).await {
        Ok(raw) => match CountryDataset::from_json(&raw) {
            Ok(dataset) => {
                tracing::info!(
                    source = %config.data_source,
                    countries = dataset.len(),
                    "country dataset loaded"
                );
                dataset
            }
            Err(error) => {
                tracing::warn!(
                    source = %config.data_source,
                    %error,
                    "country dataset malformed; using fallback dataset"
                );
                CountryDataset::fallback()
            }
        },
        Err(error) => {
            tracing::warn!(
                source = %config.data_source,
                %error,
                "country dataset unavailable; using fallback dataset"
            );
            CountryDataset::fallback()
        }
    }
}

/// Load the metadata document, falling back to the current date.
pub async fn load_metadata(config: &ApiConfig) -> AtlasMetadata {
    match read_document(&config.metadata_source, config.fetch_timeout_secs).await {
        Ok(raw) => match AtlasMetadata::from_json(&raw) {
            Ok(metadata) => metadata,
            Err(error) => {
                tracing::warn!(%error, "metadata malformed; using current date");
                AtlasMetadata::fallback_today()
            }
        },
        Err(error) => {
            tracing::warn!(%error, "metadata unavailable; using current date");
            AtlasMetadata::fallback_today()
        }
    }
}

/// Load the boundary map asset. No fallback: failure becomes a visible
/// error on the map surface.
pub async fn load_map(config: &ApiConfig) -> MapAsset {
    let raw = match read_document(&config.map_source, config.fetch_timeout_secs).await {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(source = %config.map_source, %error, "map asset unavailable");
            return MapAsset::Unavailable(format!("map data could not be loaded: {error}"));
        }
    };

    // Validate the shape before serving it through; a malformed boundary
    // document is as unusable as a missing one.
    if let Err(error) = FeatureCollection::from_json(&raw) {
        tracing::warn!(source = %config.map_source, %error, "map asset malformed");
        return MapAsset::Unavailable(format!("map data could not be parsed: {error}"));
    }

    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) => {
            tracing::info!(source = %config.map_source, "map asset loaded");
            MapAsset::Available(value.into())
        }
        Err(error) => MapAsset::Unavailable(format!("map data could not be parsed: {error}")),
    }
}

/// Read one document from its source: local filesystem or remote HTTP.
async fn read_document(source: &DocumentSource, timeout_secs: u64) -> anyhow::Result<String> {
    match source {
        DocumentSource::Path(path) => Ok(tokio::fs::read_to_string(path).await?),
        DocumentSource::Url(url) => {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()?;
            let response = client.get(url).send().await?;
            // Non-success responses are failures; the caller substitutes
            // the fallback rather than parsing an error page.
            let response = response.error_for_status()?;
            Ok(response.text().await?)
        }
    }
}
