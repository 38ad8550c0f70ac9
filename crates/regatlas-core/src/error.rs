//! # Error Types
//!
//! The error type shared across the atlas crates. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Resolution misses and absent records are deliberately **not** errors —
//! they are `Option::None` outcomes handled by the caller. `AtlasError`
//! covers the cases where a document could not be read or does not conform
//! to the expected shape.

use thiserror::Error;

/// Top-level error type for the Regulation Atlas.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// A country code failed validation (wrong length or character class).
    #[error("invalid country code {code:?}: {reason}")]
    InvalidCode {
        /// The offending input.
        code: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A JSON document could not be parsed into the expected shape.
    #[error("data format error: {0}")]
    DataFormat(#[from] serde_json::Error),

    /// A local document could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset invariant was violated (used by `regatlas validate`).
    #[error("validation error: {0}")]
    Validation(String),
}
