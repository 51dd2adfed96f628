//! Parser for the movie catalog resource.
//!
//! The resource is a JSON list of objects:
//!
//! ```json
//! [{"id": 1, "title": "Bat Man", "year": 1989, "genre": "Action", "rating": 9, "image": "images/1.jpg"}]
//! ```
//!
//! Parsing is all-or-nothing. One bad record fails the whole catalog.

use crate::error::{CatalogLoadError, Result};
use crate::types::{Movie, MovieId};
use std::collections::HashSet;

/// Parse a catalog body into movie records, preserving order.
///
/// `origin` is only used for error messages (a path or URL).
pub fn parse_catalog(body: &[u8], origin: &str) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> =
        serde_json::from_slice(body).map_err(|source| CatalogLoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    validate_catalog(&movies)?;
    Ok(movies)
}

/// Check the invariants serde can't express.
///
/// Ratings must be finite numbers and identifiers must be unique. Ratings
/// outside 0-10 are accepted; they still fall into a rating band.
pub fn validate_catalog(movies: &[Movie]) -> Result<()> {
    let mut seen: HashSet<MovieId> = HashSet::with_capacity(movies.len());
    for movie in movies {
        if !movie.rating.is_finite() {
            return Err(CatalogLoadError::InvalidRating {
                id: movie.id,
                value: movie.rating,
            });
        }
        if !seen.insert(movie.id) {
            return Err(CatalogLoadError::DuplicateId(movie.id));
        }
    }
    Ok(())
}
