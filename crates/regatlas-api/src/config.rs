//! # Service Configuration
//!
//! Environment-driven configuration, in the same spirit as the rest of the
//! stack: one `REGATLAS_*` variable per concern, with working defaults for
//! a checkout that carries the `data/` directory.

use std::path::PathBuf;

/// Where a startup document comes from: a local path or a remote URL.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Read from the local filesystem.
    Path(PathBuf),
    /// Fetch over HTTPS.
    Url(String),
}

impl DocumentSource {
    /// Interpret an environment value: anything starting with `http://` or
    /// `https://` is a URL, everything else a path.
    pub fn from_value(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::Path(PathBuf::from(value))
        }
    }
}

impl std::fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Service configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Country-data document.
    pub data_source: DocumentSource,
    /// Metadata document.
    pub metadata_source: DocumentSource,
    /// Boundary map asset.
    pub map_source: DocumentSource,
    /// Bind port.
    pub port: u16,
    /// Per-request timeout for remote document fetches, in seconds.
    pub fetch_timeout_secs: u64,
}

impl ApiConfig {
    /// Resolve configuration from `REGATLAS_*` environment variables.
    pub fn from_env() -> Self {
        let source = |var: &str, default: &str| {
            DocumentSource::from_value(&std::env::var(var).unwrap_or_else(|_| default.to_string()))
        };

        let port = std::env::var("REGATLAS_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);

        Self {
            data_source: source("REGATLAS_DATA_SOURCE", "data/countries.json"),
            metadata_source: source("REGATLAS_METADATA_SOURCE", "data/metadata.json"),
            map_source: source("REGATLAS_MAP_SOURCE", "data/boundaries.geo.json"),
            port,
            fetch_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_values_become_urls() {
        let source = DocumentSource::from_value("https://example.org/countries.json");
        assert!(matches!(source, DocumentSource::Url(_)));
    }

    #[test]
    fn test_bare_values_become_paths() {
        let source = DocumentSource::from_value("data/countries.json");
        assert!(matches!(source, DocumentSource::Path(_)));
    }
}
