//! # Country Code Resolver
//!
//! Map sources expose country identifiers inconsistently: Natural Earth
//! boundary data carries `ISO_A3` and `ADM0_A3` (and sometimes `ISO_A2` /
//! `ADM0_A2`), while pre-authored vector images carry a plain two-letter
//! code. The resolver normalizes whatever a feature's property bag offers
//! into a single canonical [`CountryCode`].
//!
//! ## Algorithm
//!
//! 1. Three-letter candidate: prefer `ISO_A3` over `ADM0_A3`.
//! 2. Two-letter candidate: prefer `ISO_A2` over `ADM0_A2`.
//! 3. If the three-letter candidate is in the fixed [`ALPHA3_TO_ALPHA2`]
//!    table, the mapped alpha-2 value wins.
//! 4. Otherwise the two-letter candidate, then the unmapped three-letter
//!    candidate, then `None`.
//!
//! Resolution failure is a valid, silently-handled outcome — a feature with
//! no usable code simply has no data to display. No error is ever raised.

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;

/// Fixed alpha-3 → alpha-2 mapping for the jurisdictions the atlas covers.
///
/// Deliberately small: only codes that can actually appear as dataset keys
/// are mapped. Anything else passes through resolution unmapped.
pub const ALPHA3_TO_ALPHA2: [(&str, &str); 10] = [
    ("SGP", "SG"),
    ("USA", "US"),
    ("GBR", "GB"),
    ("CHE", "CH"),
    ("ARE", "AE"),
    ("HKG", "HK"),
    ("JPN", "JP"),
    ("DEU", "DE"),
    ("FRA", "FR"),
    ("AUS", "AU"),
];

/// Look up the alpha-2 equivalent of an alpha-3 code in the fixed table.
pub fn alpha2_for(alpha3: &str) -> Option<&'static str> {
    ALPHA3_TO_ALPHA2
        .iter()
        .find(|(a3, _)| *a3 == alpha3)
        .map(|(_, a2)| *a2)
}

/// The raw property bag of a map feature.
///
/// Field presence varies by data source; all fields are optional. Unknown
/// properties (geometry metadata, population figures, ...) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureProperties {
    /// ISO 3166-1 alpha-3 code.
    #[serde(rename = "ISO_A3", default, skip_serializing_if = "Option::is_none")]
    pub iso_a3: Option<String>,

    /// Admin-0 alpha-3 code (Natural Earth fallback field).
    #[serde(rename = "ADM0_A3", default, skip_serializing_if = "Option::is_none")]
    pub adm0_a3: Option<String>,

    /// ISO 3166-1 alpha-2 code.
    #[serde(rename = "ISO_A2", default, skip_serializing_if = "Option::is_none")]
    pub iso_a2: Option<String>,

    /// Admin-0 alpha-2 code.
    #[serde(rename = "ADM0_A2", default, skip_serializing_if = "Option::is_none")]
    pub adm0_a2: Option<String>,

    /// Administrative display name (`ADMIN` in Natural Earth).
    #[serde(rename = "ADMIN", default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,

    /// Short display name (`NAME`).
    #[serde(rename = "NAME", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FeatureProperties {
    /// The display name for the feature, preferring the administrative name.
    pub fn display_name(&self) -> Option<&str> {
        self.admin.as_deref().or(self.name.as_deref())
    }
}

/// Resolve a feature's property bag to a canonical country code.
///
/// Returns `None` when no recognized code property is present or when the
/// candidate fails [`CountryCode`] validation (placeholder markers such as
/// Natural Earth's `-99`).
pub fn resolve(props: &FeatureProperties) -> Option<CountryCode> {
    let alpha3 = props.iso_a3.as_deref().or(props.adm0_a3.as_deref());
    let alpha2 = props.iso_a2.as_deref().or(props.adm0_a2.as_deref());

    if let Some(a3) = alpha3 {
        if let Some(mapped) = alpha2_for(a3) {
            return CountryCode::new(mapped).ok();
        }
    }
    if let Some(a2) = alpha2 {
        return CountryCode::new(a2).ok();
    }
    alpha3.and_then(|a3| CountryCode::new(a3).ok())
}
