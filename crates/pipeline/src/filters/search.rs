//! Filter on a free-text title search.

use crate::traits::Filter;
use data_loader::Movie;

/// Keeps records whose title contains the search text, ignoring case.
///
/// Empty search text keeps everything. The text is used as typed; no
/// trimming or tokenizing.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(search: &str) -> Self {
        Self {
            needle: search.to_lowercase(),
        }
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.needle.is_empty() || movie.title.to_lowercase().contains(&self.needle)
    }
}
