//! Core domain types for the movie catalog.
//!
//! A catalog is an ordered list of [`Movie`] records. It is loaded once and
//! shared read-only from then on, which is why it travels as `Arc<[Movie]>`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Unique identifier for a movie
pub type MovieId = u32;

/// The full, unfiltered list of movies, in the order it was loaded
pub type Catalog = Arc<[Movie]>;

/// A single movie record as served by the catalog resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    /// Free text, compared case-insensitively when filtering
    pub genre: String,
    /// Expected to be in 0-10, but not clamped
    pub rating: f64,
    /// URI or path of the poster image
    pub image: String,
}

impl Movie {
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        rating: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            genre: genre.into(),
            rating,
            image: image.into(),
        }
    }
}

/// An empty catalog, used before the first successful load and after a failed one
pub fn empty_catalog() -> Catalog {
    Arc::from(Vec::new())
}
