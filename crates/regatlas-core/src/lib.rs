//! # regatlas-core — Foundational Types for the Regulation Atlas
//!
//! This crate is the bedrock of the Regulation Atlas. It defines the
//! country-code primitives, the jurisdiction record model, the immutable
//! dataset loaded at startup, and the map-region sources that feed the
//! interaction layer. Every other crate in the workspace depends on
//! `regatlas-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrapper for the canonical code.** `CountryCode` has a
//!    validated constructor — no bare strings for lookup keys.
//!
//! 2. **Exact-match lookup.** `CountryDataset::get()` is exact-match on the
//!    canonical code. No fuzzy matching, no case folding beyond the fixed
//!    alpha-3 table in [`resolve`].
//!
//! 3. **Resolution failure is not an error.** Map features with no
//!    recognizable code properties resolve to `None` and are silently
//!    skipped by consumers. Only I/O and format problems are `AtlasError`.
//!
//! 4. **The dataset is immutable.** It is loaded once (or substituted
//!    wholesale by [`dataset::CountryDataset::fallback`]) and never written
//!    for the process lifetime.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `regatlas-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod country;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod metadata;
pub mod record;
pub mod region;
pub mod resolve;

// Re-export primary types for ergonomic imports.
pub use country::CountryCode;
pub use dataset::CountryDataset;
pub use error::AtlasError;
pub use geo::{Feature, FeatureCollection};
pub use metadata::AtlasMetadata;
pub use record::{
    ComplianceStatus, CountryRecord, LegalFrameworkItem, Paper, Regulation, SourceLink,
};
pub use region::{GeoJsonRegions, Region, RegionSource, StaticRegions};
pub use resolve::{resolve, FeatureProperties, ALPHA3_TO_ALPHA2};
