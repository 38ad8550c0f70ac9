//! # Jurisdiction Record Model
//!
//! The structured regulatory-information payload for one jurisdiction,
//! mirroring the shape of `data/countries.json`. Every field is optional or
//! default-empty: the renderer decides section by section what to show, and
//! curation can land partial records without breaking deserialization.
//!
//! Field names in the JSON documents are camelCase (`lastUpdated`,
//! `consultationPapers`); the serde renames keep the on-disk format stable.

use serde::{Deserialize, Serialize};

/// Compliance posture of a jurisdiction, used only for map coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    /// Tokenization has a clear regulatory framework.
    Clear,
    /// Regulatory treatment is unclear or in flux.
    Unclear,
    /// Tokenization activity is prohibited or effectively blocked.
    Prohibited,
}

impl ComplianceStatus {
    /// Stable lowercase identifier, matching the JSON representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Unclear => "unclear",
            Self::Prohibited => "prohibited",
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One regulation or statute entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regulation {
    /// Short title (e.g., "Payment Services Act (PSA) 2019").
    pub title: String,
    /// One-paragraph description of scope and effect.
    pub description: String,
    /// Date the regulation took effect, if known (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    /// Statute or act reference (e.g., "Act 2 of 2019").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// A citable source link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLink {
    /// Display name of the source.
    pub name: String,
    /// Absolute URL.
    pub url: String,
    /// Source category (e.g., "Legislation", "Regulatory Portal").
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A whitepaper or consultation paper reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Paper title.
    pub title: String,
    /// Summary of the paper's subject.
    pub description: String,
    /// Publication date or month (free-form, e.g., "2022-11").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Link to the paper, if published online.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One statute of the legal-framework breakdown: the law, its key
/// provisions, and the penalties it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalFrameworkItem {
    /// Name of the law (e.g., "Payment Services Act 2019").
    pub law: String,
    /// Statute chapter or act reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    /// Provisions most relevant to tokenization, in citation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_provisions: Vec<String>,
    /// Penalties for non-compliance, as curated prose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalties: Option<String>,
    /// When the law took effect (free-form; phased rollouts are prose).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
}

/// The regulatory-information record for one jurisdiction.
///
/// Keyed by canonical two-letter code in [`crate::CountryDataset`]. The
/// renderer consumes `overview` through `last_updated`; the remaining fields
/// feed the curation CLI and richer exports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// Narrative summary of the jurisdiction's framework.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,

    /// Main rules, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regulations: Vec<Regulation>,

    /// Compliance requirements, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,

    /// Regulators and enforcement bodies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authorities: Vec<String>,

    /// Citable sources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceLink>,

    /// Whitepapers published by the jurisdiction's regulator.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub whitepapers: Vec<Paper>,

    /// Open or concluded consultation papers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consultation_papers: Vec<Paper>,

    /// Statute-level breakdown with key provisions and penalties.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legal_framework: Vec<LegalFrameworkItem>,

    /// Date the record was last curated (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    /// Map-coloring status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ComplianceStatus>,

    /// Whether the record was last touched by the automated fetcher.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_fetched: bool,

    /// Curation format version (e.g., "2.0").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,
}

impl CountryRecord {
    /// Whether the record carries any displayable content at all.
    pub fn has_content(&self) -> bool {
        self.overview.is_some()
            || !self.regulations.is_empty()
            || !self.requirements.is_empty()
            || !self.authorities.is_empty()
            || !self.sources.is_empty()
    }
}
