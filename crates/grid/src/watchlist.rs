//! The watchlist collaborator.
//!
//! The grid never owns a watchlist. Its parent passes one in when rendering
//! (for the per-card membership flag) and when the user toggles a movie.

use data_loader::MovieId;
use std::collections::HashSet;

/// A set of movie ids the user has marked
pub trait Watchlist {
    fn contains(&self, id: MovieId) -> bool;

    /// Flip membership of `id`, returning whether it is now on the list
    fn toggle(&mut self, id: MovieId) -> bool;
}

/// Session-only watchlist
#[derive(Debug, Clone, Default)]
pub struct InMemoryWatchlist {
    ids: HashSet<MovieId>,
}

impl InMemoryWatchlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<MovieId> for InMemoryWatchlist {
    fn from_iter<I: IntoIterator<Item = MovieId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Watchlist for InMemoryWatchlist {
    fn contains(&self, id: MovieId) -> bool {
        self.ids.contains(&id)
    }

    fn toggle(&mut self, id: MovieId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }
}
