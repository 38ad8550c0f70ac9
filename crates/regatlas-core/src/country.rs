//! # Country Code Newtype
//!
//! `CountryCode` is the canonical jurisdiction key used for all lookups.
//! Canonical codes are normally ISO 3166-1 alpha-2 (`SG`, `US`), but an
//! alpha-3 code that the fixed table in [`crate::resolve`] does not cover
//! is passed through unmapped, so three-letter values are also valid.
//!
//! Lookup is exact-match on the canonical code. Construction validates the
//! character class so that a `CountryCode` can never hold anything but
//! 2 or 3 ASCII uppercase letters — placeholder values from map sources
//! (Natural Earth uses `-99` for disputed territories) fail construction
//! and fall out of resolution as `None`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AtlasError;

/// Canonical jurisdiction identifier: 2 or 3 ASCII uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Construct a validated country code.
    ///
    /// # Errors
    ///
    /// Rejects input that is not exactly 2 or 3 characters, or that contains
    /// anything other than ASCII uppercase letters. No case folding is
    /// performed — `sg` is rejected, not normalized.
    pub fn new(code: impl Into<String>) -> Result<Self, AtlasError> {
        let code = code.into();
        if !(2..=3).contains(&code.len()) {
            return Err(AtlasError::InvalidCode {
                code,
                reason: "expected 2 or 3 characters".to_string(),
            });
        }
        if !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(AtlasError::InvalidCode {
                code,
                reason: "expected ASCII uppercase letters".to_string(),
            });
        }
        Ok(Self(code))
    }

    /// Access the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a two-letter (alpha-2) code.
    pub fn is_alpha2(&self) -> bool {
        self.0.len() == 2
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Deserialization goes through the validated constructor so that dataset
// keys and request bodies cannot smuggle in malformed codes.
impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CountryCode::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha2_accepted() {
        let code = CountryCode::new("SG").unwrap();
        assert_eq!(code.as_str(), "SG");
        assert!(code.is_alpha2());
    }

    #[test]
    fn test_alpha3_accepted() {
        let code = CountryCode::new("SGP").unwrap();
        assert_eq!(code.as_str(), "SGP");
        assert!(!code.is_alpha2());
    }

    #[test]
    fn test_lowercase_rejected() {
        assert!(CountryCode::new("sg").is_err());
    }

    #[test]
    fn test_placeholder_rejected() {
        // Natural Earth uses "-99" as a null marker.
        assert!(CountryCode::new("-99").is_err());
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(CountryCode::new("S").is_err());
        assert!(CountryCode::new("SGPX").is_err());
        assert!(CountryCode::new("").is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<CountryCode, _> = serde_json::from_str("\"GB\"");
        assert_eq!(ok.unwrap().as_str(), "GB");
        let bad: Result<CountryCode, _> = serde_json::from_str("\"g b\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_display_matches_inner() {
        let code = CountryCode::new("CH").unwrap();
        assert_eq!(code.to_string(), "CH");
    }
}
