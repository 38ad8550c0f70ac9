//! # Boundary Document Types
//!
//! Minimal GeoJSON FeatureCollection model — just enough structure to carry
//! each feature's property bag through to the resolver. Geometry is kept as
//! raw JSON and never interpreted here; the serving layer passes it through
//! to whichever map presentation is in front.

use serde::{Deserialize, Serialize};

use crate::error::AtlasError;
use crate::resolve::FeatureProperties;

/// One boundary feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Feature type tag; always `"Feature"` in conforming documents.
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,

    /// The property bag the resolver consumes.
    #[serde(default)]
    pub properties: FeatureProperties,

    /// Raw geometry, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,
}

fn feature_type() -> String {
    "Feature".to_string()
}

/// A GeoJSON FeatureCollection of country boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Collection type tag; always `"FeatureCollection"`.
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,

    /// Boundary features.
    #[serde(default)]
    pub features: Vec<Feature>,
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

impl FeatureCollection {
    /// Parse a boundary document.
    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        Ok(serde_json::from_str(json)?)
    }
}
