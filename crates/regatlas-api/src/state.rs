//! # Application State
//!
//! Shared state for the Axum application. The dataset, metadata, and map
//! asset are resolved once at startup and immutable thereafter; the only
//! mutable member is the panel selection, mutated by discrete selection
//! events and guarded by a single `RwLock`.

use std::sync::Arc;

use parking_lot::RwLock;

use regatlas_core::{AtlasMetadata, CountryDataset};
use regatlas_panel::PanelState;

/// The map asset as resolved at startup. There is no fallback map: a failed
/// load stays visible as an error on the map surface for the process
/// lifetime.
#[derive(Debug, Clone)]
pub enum MapAsset {
    /// The boundary document, served through as raw JSON.
    Available(Arc<serde_json::Value>),
    /// Load failed; the message is shown in place of the map.
    Unavailable(String),
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable country dataset (primary or the wholesale fallback).
    pub dataset: Arc<CountryDataset>,
    /// Immutable atlas metadata.
    pub metadata: Arc<AtlasMetadata>,
    /// Boundary map asset or its visible load error.
    pub map: Arc<MapAsset>,
    /// The single selection, shared with the UI surface.
    pub panel: Arc<RwLock<PanelState>>,
}

impl AppState {
    /// Assemble state from startup-resolved documents.
    pub fn new(dataset: CountryDataset, metadata: AtlasMetadata, map: MapAsset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            metadata: Arc::new(metadata),
            map: Arc::new(map),
            panel: Arc::new(RwLock::new(PanelState::new())),
        }
    }

    /// State backed by the hard-coded fallback dataset. Used by tests and
    /// as the degraded-mode result when every startup load fails.
    pub fn degraded(map_error: impl Into<String>) -> Self {
        Self::new(
            CountryDataset::fallback(),
            AtlasMetadata::fallback_today(),
            MapAsset::Unavailable(map_error.into()),
        )
    }
}
