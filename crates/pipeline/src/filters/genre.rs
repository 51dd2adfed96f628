//! Filter to keep only movies of the selected genre.
//!
//! Catalog genres are free text, so the comparison ignores case:
//! a record tagged "ACTION" matches the "Action" option.

use crate::state::GenreSelection;
use crate::traits::Filter;
use data_loader::Movie;

/// Keeps records whose genre equals the selection, or everything for "All genres".
pub struct GenreFilter {
    wanted: Option<String>,
}

impl GenreFilter {
    pub fn new(selection: GenreSelection) -> Self {
        let wanted = match selection {
            GenreSelection::All => None,
            GenreSelection::Only(genre) => Some(genre.label().to_lowercase()),
        };
        Self { wanted }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        match &self.wanted {
            None => true,
            Some(wanted) => movie.genre.to_lowercase() == *wanted,
        }
    }
}
