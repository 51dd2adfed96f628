//! Where the catalog comes from.
//!
//! The catalog lives at one fixed location: a static JSON file on disk or a
//! URL serving the same document. Retrieval is one request with no query
//! parameters, pagination or authentication.

use crate::error::{CatalogLoadError, Result};
use crate::parser::parse_catalog;
use crate::types::Movie;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Default location of the static catalog
pub const DEFAULT_CATALOG: &str = "movies.json";

/// A fixed catalog location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Http(String),
}

impl CatalogSource {
    /// Pick a source kind from a location string.
    ///
    /// `http://` and `https://` locations are fetched over HTTP, anything
    /// else is treated as a file path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            CatalogSource::Http(location.to_string())
        } else {
            CatalogSource::File(PathBuf::from(location))
        }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::File(PathBuf::from(DEFAULT_CATALOG))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Http(url) => f.write_str(url),
        }
    }
}

/// Retrieve and parse the whole catalog.
///
/// Either every record comes back or an error does; there is no partial
/// catalog.
pub async fn fetch_catalog(source: &CatalogSource) -> Result<Vec<Movie>> {
    debug!("Fetching catalog from {}", source);

    let body = match source {
        CatalogSource::File(path) => {
            tokio::fs::read(path)
                .await
                .map_err(|source| CatalogLoadError::Io {
                    path: path.display().to_string(),
                    source,
                })?
        }
        CatalogSource::Http(url) => fetch_http(url).await?,
    };

    debug!("Received {} bytes from {}", body.len(), source);
    parse_catalog(&body, &source.to_string())
}

async fn fetch_http(url: &str) -> Result<Vec<u8>> {
    let http_err = |source| CatalogLoadError::Http {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(http_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogLoadError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(http_err)?;
    Ok(bytes.to_vec())
}
