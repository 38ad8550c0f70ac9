//! # Country Dataset
//!
//! The in-memory mapping from canonical code to [`CountryRecord`], loaded
//! once at startup and treated as immutable read-only state for the process
//! lifetime. There is no write path.
//!
//! ## Degraded mode
//!
//! When the primary document cannot be fetched or parsed, the caller
//! substitutes [`CountryDataset::fallback`] wholesale. The fallback is a
//! deliberately small four-jurisdiction subset — the degraded-mode dataset,
//! not a second source of truth. `data/countries.json` stays canonical.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;
use crate::error::AtlasError;
use crate::record::{ComplianceStatus, CountryRecord, Regulation, SourceLink};

/// Immutable mapping from canonical country code to its record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryDataset {
    countries: BTreeMap<CountryCode, CountryRecord>,
}

impl CountryDataset {
    /// Build a dataset from an iterator of entries.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (CountryCode, CountryRecord)>,
    ) -> Self {
        Self {
            countries: entries.into_iter().collect(),
        }
    }

    /// Parse a dataset from its JSON document form: an object keyed by
    /// canonical code.
    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Exact-match lookup by canonical code.
    pub fn get(&self, code: &CountryCode) -> Option<&CountryRecord> {
        self.countries.get(code)
    }

    /// Number of jurisdictions in the dataset.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Iterate over entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&CountryCode, &CountryRecord)> {
        self.countries.iter()
    }

    /// All canonical codes in the dataset, in order.
    pub fn codes(&self) -> impl Iterator<Item = &CountryCode> {
        self.countries.keys()
    }

    /// Insert or replace a record. Used only by the curation CLI — the
    /// serving path never mutates a dataset.
    pub fn upsert(&mut self, code: CountryCode, record: CountryRecord) {
        self.countries.insert(code, record);
    }

    /// Mutable access to one record, for in-place curation stamps.
    pub fn get_mut(&mut self, code: &CountryCode) -> Option<&mut CountryRecord> {
        self.countries.get_mut(code)
    }

    /// The hard-coded degraded-mode dataset: Singapore, United States,
    /// United Kingdom, and Switzerland, each with a non-empty overview and
    /// last-updated stamp.
    pub fn fallback() -> Self {
        let entries = [
            ("SG", singapore_fallback()),
            ("US", united_states_fallback()),
            ("GB", united_kingdom_fallback()),
            ("CH", switzerland_fallback()),
        ];
        // The literal codes above always validate.
        Self::from_entries(
            entries
                .into_iter()
                .filter_map(|(code, record)| CountryCode::new(code).ok().map(|c| (c, record))),
        )
    }
}

const FALLBACK_STAMP: &str = "2025-11-02";

fn singapore_fallback() -> CountryRecord {
    CountryRecord {
        overview: Some(
            "Singapore has established a comprehensive and progressive regulatory \
             framework for tokenization through the Monetary Authority of Singapore \
             (MAS). The Payment Services Act (PSA) 2019 regulates digital payment \
             tokens, while securities tokens fall under the Securities and Futures \
             Act (SFA)."
                .to_string(),
        ),
        regulations: vec![
            Regulation {
                title: "Payment Services Act (PSA) 2019".to_string(),
                description: "Framework governing digital payment token services \
                              including exchanges, wallet providers, and issuers. \
                              Requires licensing for DPT service providers."
                    .to_string(),
                effective_date: Some("2020-01-28".to_string()),
                reference: Some("Act 2 of 2019".to_string()),
            },
            Regulation {
                title: "Securities and Futures Act (SFA)".to_string(),
                description: "Applies to tokens that constitute capital markets \
                              products. Governs the offer, sale, and trading of \
                              security tokens."
                    .to_string(),
                effective_date: None,
                reference: Some("Chapter 289".to_string()),
            },
        ],
        requirements: vec![
            "License required under the PSA for digital payment token services".to_string(),
            "AML/CFT compliance mandatory under MAS Notice PSN01".to_string(),
            "Safeguarding and segregation of customer assets".to_string(),
        ],
        authorities: vec![
            "Monetary Authority of Singapore (MAS)".to_string(),
            "Accounting and Corporate Regulatory Authority (ACRA)".to_string(),
        ],
        sources: vec![
            SourceLink {
                name: "MAS Digital Assets".to_string(),
                url: "https://www.mas.gov.sg/regulation/fintech/digital-assets".to_string(),
                kind: Some("Regulatory Portal".to_string()),
            },
            SourceLink {
                name: "Payment Services Act 2019".to_string(),
                url: "https://sso.agc.gov.sg/Act/PSA2019".to_string(),
                kind: Some("Legislation".to_string()),
            },
        ],
        last_updated: Some(FALLBACK_STAMP.to_string()),
        status: Some(ComplianceStatus::Clear),
        ..Default::default()
    }
}

fn united_states_fallback() -> CountryRecord {
    CountryRecord {
        overview: Some(
            "The United States regulates tokenization through overlapping federal \
             and state regimes. The SEC applies the Howey test to determine whether \
             a token is a security; the CFTC treats certain digital assets as \
             commodities; FinCEN imposes money-transmission registration."
                .to_string(),
        ),
        regulations: vec![Regulation {
            title: "Securities Act of 1933 / Securities Exchange Act of 1934".to_string(),
            description: "Token offerings that meet the Howey test are securities \
                          offerings and must be registered or exempt."
                .to_string(),
            effective_date: None,
            reference: None,
        }],
        requirements: vec![
            "Register security token offerings with the SEC or qualify for an exemption"
                .to_string(),
            "FinCEN MSB registration for money transmission".to_string(),
            "State-level licensing (e.g., NY BitLicense) where applicable".to_string(),
        ],
        authorities: vec![
            "Securities and Exchange Commission (SEC)".to_string(),
            "Commodity Futures Trading Commission (CFTC)".to_string(),
            "Financial Crimes Enforcement Network (FinCEN)".to_string(),
        ],
        sources: vec![SourceLink {
            name: "SEC Framework for Digital Assets".to_string(),
            url: "https://www.sec.gov/corpfin/framework-investment-contract-analysis-digital-assets".to_string(),
            kind: Some("Guidelines".to_string()),
        }],
        last_updated: Some(FALLBACK_STAMP.to_string()),
        status: Some(ComplianceStatus::Unclear),
        ..Default::default()
    }
}

fn united_kingdom_fallback() -> CountryRecord {
    CountryRecord {
        overview: Some(
            "The United Kingdom regulates tokenized assets through the Financial \
             Conduct Authority. The FSMA 2023 brought cryptoassets within the \
             regulatory perimeter, and the FCA's cryptoasset registration regime \
             imposes AML requirements on exchange and custody providers."
                .to_string(),
        ),
        regulations: vec![Regulation {
            title: "Financial Services and Markets Act 2023".to_string(),
            description: "Extends the regulatory perimeter to cryptoassets and \
                          enables the digital securities sandbox."
                .to_string(),
            effective_date: Some("2023-06-29".to_string()),
            reference: None,
        }],
        requirements: vec![
            "FCA cryptoasset registration for exchange and custody business".to_string(),
            "Financial promotions regime compliance for token marketing".to_string(),
        ],
        authorities: vec![
            "Financial Conduct Authority (FCA)".to_string(),
            "Bank of England".to_string(),
        ],
        sources: vec![SourceLink {
            name: "FCA Cryptoassets".to_string(),
            url: "https://www.fca.org.uk/firms/cryptoassets".to_string(),
            kind: Some("Regulatory Portal".to_string()),
        }],
        last_updated: Some(FALLBACK_STAMP.to_string()),
        status: Some(ComplianceStatus::Clear),
        ..Default::default()
    }
}

fn switzerland_fallback() -> CountryRecord {
    CountryRecord {
        overview: Some(
            "Switzerland offers one of the most developed frameworks for \
             tokenization. The DLT Act introduced ledger-based securities into the \
             Code of Obligations, and FINMA's token taxonomy (payment, utility, \
             asset) drives licensing treatment."
                .to_string(),
        ),
        regulations: vec![Regulation {
            title: "DLT Act (Federal Act on the Adaptation of Federal Law to \
                    Developments in DLT)"
                .to_string(),
            description: "Introduces ledger-based securities and a DLT trading \
                          facility license category."
                .to_string(),
            effective_date: Some("2021-08-01".to_string()),
            reference: None,
        }],
        requirements: vec![
            "FINMA licensing according to token classification".to_string(),
            "AMLA compliance for payment token intermediaries".to_string(),
        ],
        authorities: vec!["Swiss Financial Market Supervisory Authority (FINMA)".to_string()],
        sources: vec![SourceLink {
            name: "FINMA ICO Guidelines".to_string(),
            url: "https://www.finma.ch/en/authorisation/fintech/".to_string(),
            kind: Some("Guidelines".to_string()),
        }],
        last_updated: Some(FALLBACK_STAMP.to_string()),
        status: Some(ComplianceStatus::Clear),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_covers_four_jurisdictions() {
        let dataset = CountryDataset::fallback();
        assert_eq!(dataset.len(), 4);
        for code in ["SG", "US", "GB", "CH"] {
            let code = CountryCode::new(code).unwrap();
            let record = dataset.get(&code).expect("fallback record present");
            assert!(
                record.overview.as_deref().is_some_and(|o| !o.is_empty()),
                "{code} overview non-empty"
            );
            assert!(
                record.last_updated.as_deref().is_some_and(|d| !d.is_empty()),
                "{code} lastUpdated non-empty"
            );
        }
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let dataset = CountryDataset::fallback();
        // A three-letter code never matches a two-letter key, even when it
        // denotes the same jurisdiction.
        let sgp = CountryCode::new("SGP").unwrap();
        assert!(dataset.get(&sgp).is_none());
    }

    #[test]
    fn test_from_json_object_form() {
        let json = r#"{
            "SG": {"overview": "MAS framework.", "lastUpdated": "2025-01-01"},
            "JP": {}
        }"#;
        let dataset = CountryDataset::from_json(json).unwrap();
        assert_eq!(dataset.len(), 2);
        let sg = CountryCode::new("SG").unwrap();
        assert_eq!(
            dataset.get(&sg).unwrap().overview.as_deref(),
            Some("MAS framework.")
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_keys() {
        let json = r#"{"s!": {}}"#;
        assert!(CountryDataset::from_json(json).is_err());
    }

    #[test]
    fn test_round_trip_preserves_entries() {
        let dataset = CountryDataset::fallback();
        let json = serde_json::to_string(&dataset).unwrap();
        let parsed = CountryDataset::from_json(&json).unwrap();
        assert_eq!(parsed.len(), dataset.len());
        let gb = CountryCode::new("GB").unwrap();
        assert_eq!(
            parsed.get(&gb).unwrap().authorities,
            dataset.get(&gb).unwrap().authorities
        );
    }
}
