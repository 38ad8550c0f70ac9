//! # Region Sources
//!
//! The atlas has two alternative map presentations: a tiled boundary layer
//! driven by GeoJSON, and a pre-authored vector image whose clickable
//! elements carry `data-country` / `data-name` attributes. Both are the same
//! interaction contract — enumerate clickable regions, each exposing a
//! resolvable code and a display name, each firing a selection event — so
//! both sit behind the [`RegionSource`] trait and either can back the UI.

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;
use crate::error::AtlasError;
use crate::geo::FeatureCollection;
use crate::resolve::resolve;

/// One clickable region of a map presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Canonical code, when the region's properties resolved to one.
    /// `None` regions are still rendered but show the no-data placeholder
    /// when selected.
    pub code: Option<CountryCode>,

    /// Display name shown in the details panel heading.
    pub display_name: String,
}

/// A map presentation able to enumerate its clickable regions.
pub trait RegionSource {
    /// The regions this presentation exposes, in presentation order.
    fn regions(&self) -> Vec<Region>;
}

// ─── GeoJSON-backed presentation ─────────────────────────────────────

/// Regions derived from a GeoJSON boundary document: each feature's
/// property bag is run through the resolver.
#[derive(Debug, Clone)]
pub struct GeoJsonRegions {
    collection: FeatureCollection,
}

impl GeoJsonRegions {
    /// Wrap an already-parsed boundary document.
    pub fn new(collection: FeatureCollection) -> Self {
        Self { collection }
    }

    /// Parse a boundary document and wrap it.
    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        Ok(Self::new(FeatureCollection::from_json(json)?))
    }
}

impl RegionSource for GeoJsonRegions {
    fn regions(&self) -> Vec<Region> {
        self.collection
            .features
            .iter()
            .map(|feature| Region {
                code: resolve(&feature.properties),
                display_name: feature
                    .properties
                    .display_name()
                    .unwrap_or("Unknown territory")
                    .to_string(),
            })
            .collect()
    }
}

// ─── Pre-authored vector-image presentation ──────────────────────────

/// One entry of the static region sidecar, mirroring the `data-country`
/// and `data-name` attributes of the vector image's clickable elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticRegionEntry {
    /// The `data-country` attribute value.
    #[serde(rename = "country")]
    pub country: String,

    /// The `data-name` attribute value.
    #[serde(rename = "name")]
    pub name: String,
}

/// Regions for the static interactive image, loaded from a JSON sidecar
/// listing the image's clickable elements.
#[derive(Debug, Clone)]
pub struct StaticRegions {
    entries: Vec<StaticRegionEntry>,
}

impl StaticRegions {
    /// Wrap an explicit entry list.
    pub fn new(entries: Vec<StaticRegionEntry>) -> Self {
        Self { entries }
    }

    /// Parse the sidecar document (a JSON array of entries).
    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl RegionSource for StaticRegions {
    fn regions(&self) -> Vec<Region> {
        self.entries
            .iter()
            .map(|entry| Region {
                code: CountryCode::new(entry.country.clone()).ok(),
                display_name: entry.name.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geojson_regions_resolve_codes() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"ADMIN": "Singapore", "ISO_A3": "SGP"}},
            {"type": "Feature", "properties": {"ADMIN": "Somewhere", "ISO_A3": "-99"}}
        ]}"#;
        let source = GeoJsonRegions::from_json(json).unwrap();
        let regions = source.regions();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].code.as_ref().unwrap().as_str(), "SG");
        assert_eq!(regions[0].display_name, "Singapore");
        // Unresolvable regions stay enumerable, just without a code.
        assert!(regions[1].code.is_none());
        assert_eq!(regions[1].display_name, "Somewhere");
    }

    #[test]
    fn test_static_regions_mirror_data_attributes() {
        let json = r#"[
            {"country": "US", "name": "United States"},
            {"country": "CH", "name": "Switzerland"}
        ]"#;
        let source = StaticRegions::from_json(json).unwrap();
        let regions = source.regions();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].code.as_ref().unwrap().as_str(), "US");
        assert_eq!(regions[1].display_name, "Switzerland");
    }

    #[test]
    fn test_shipped_sidecar_document_loads() {
        let raw = std::fs::read_to_string(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../data/regions.json"
        ))
        .unwrap();
        let source = StaticRegions::from_json(&raw).unwrap();
        let regions = source.regions();
        assert_eq!(regions.len(), 6);
        // Every shipped entry carries a valid code and a display name.
        for region in &regions {
            assert!(region.code.is_some(), "{} has no code", region.display_name);
            assert!(!region.display_name.is_empty());
        }
    }

    #[test]
    fn test_both_sources_satisfy_one_contract() {
        // The serving layer only sees `dyn RegionSource`.
        let geo: Box<dyn RegionSource> = Box::new(
            GeoJsonRegions::from_json(r#"{"type": "FeatureCollection", "features": []}"#).unwrap(),
        );
        let fixed: Box<dyn RegionSource> = Box::new(StaticRegions::new(Vec::new()));
        assert!(geo.regions().is_empty());
        assert!(fixed.regions().is_empty());
    }
}
