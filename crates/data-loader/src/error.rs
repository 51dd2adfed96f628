//! Error types for the data-loader crate.
//!
//! Every variant here is a retrieval failure from the point of view of the
//! grid: the catalog could not be obtained in full, so nothing is shown.
//! The variants only exist to make the diagnostic log useful.

use thiserror::Error;

use crate::types::MovieId;

/// Errors that can occur while retrieving or parsing the movie catalog
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    /// Static catalog file could not be read
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed before a response body was received
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Body was not a JSON list of movie objects
    ///
    /// This covers missing fields and non-numeric ratings too, since serde
    /// rejects those while deserializing.
    #[error("Malformed catalog from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A movie record had a rating that is not a finite number
    #[error("Invalid rating for movie {id}: {value}")]
    InvalidRating { id: MovieId, value: f64 },

    /// Two records share the same identifier
    #[error("Duplicate movie id {0}")]
    DuplicateId(MovieId),

    /// The retrieval task ended without reporting a result
    #[error("Catalog retrieval was interrupted")]
    Interrupted,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogLoadError>;
