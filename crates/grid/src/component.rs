//! # Movies Grid Component
//!
//! Owns everything the grid needs between renders:
//! 1. The catalog loader and, once it has finished, the catalog
//! 2. The filter state, changed only through the three setters
//! 3. The filter engine, which caches the visible subset
//!
//! The catalog is installed exactly once. Until then the view is
//! [`GridView::Loading`]; afterwards it is either the visible movies or
//! [`GridView::NoMatches`], which is also what a failed load looks like.

use data_loader::{Catalog, CatalogLoader, CatalogSource, LoadState, Movie, MovieId, PendingCatalog, empty_catalog};
use pipeline::{FilterEngine, FilterState, GenreSelection, RatingSelection};
use tracing::{debug, info, warn};

use crate::render::{CardRenderer, render_grid};
use crate::watchlist::Watchlist;

/// What the grid should show right now
#[derive(Debug, PartialEq)]
pub enum GridView<'a> {
    /// The catalog hasn't arrived yet
    Loading,
    /// Loaded, but nothing passes the filters (or nothing was loaded)
    NoMatches,
    /// Visible movies in catalog order
    Movies(Vec<&'a Movie>),
}

impl GridView<'_> {
    pub fn visible_count(&self) -> usize {
        match self {
            GridView::Movies(movies) => movies.len(),
            GridView::Loading | GridView::NoMatches => 0,
        }
    }
}

pub struct MoviesGrid {
    loader: CatalogLoader,
    catalog: Catalog,
    filters: FilterState,
    engine: FilterEngine,
}

impl MoviesGrid {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            loader: CatalogLoader::new(source),
            catalog: empty_catalog(),
            filters: FilterState::default(),
            engine: FilterEngine::new(),
        }
    }

    /// Kick off the catalog retrieval.
    ///
    /// Only the first call does anything. Feed the resolved handle back
    /// through [`MoviesGrid::receive_catalog`]. Needs a tokio runtime.
    pub fn activate(&mut self) -> Option<PendingCatalog> {
        self.loader.start()
    }

    /// Install the retrieval outcome. A failure leaves the catalog empty.
    pub fn receive_catalog(&mut self, result: data_loader::Result<Vec<Movie>>) {
        if let Some(catalog) = self.loader.complete(result) {
            self.catalog = catalog;
        }
    }

    /// Activate and wait for the catalog in one go.
    pub async fn load(&mut self) {
        if let Some(pending) = self.activate() {
            let result = pending.await;
            self.receive_catalog(result);
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.loader.state()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
        debug!("Search set to {:?}", self.filters.search);
    }

    pub fn set_genre(&mut self, genre: GenreSelection) {
        self.filters.genre = genre;
        debug!("Genre set to {}", genre);
    }

    pub fn set_rating(&mut self, rating: RatingSelection) {
        self.filters.rating = rating;
        debug!("Rating set to {}", rating);
    }

    /// Current view, reusing the last filtering result when neither the
    /// catalog nor the filters changed.
    pub fn view(&mut self) -> GridView<'_> {
        if !self.loader.state().is_complete() {
            return GridView::Loading;
        }

        let movies = self.engine.visible_movies(&self.catalog, &self.filters);
        if movies.is_empty() {
            GridView::NoMatches
        } else {
            GridView::Movies(movies)
        }
    }

    /// Render the whole grid as text.
    pub fn render(&mut self, watchlist: &dyn Watchlist, cards: &dyn CardRenderer) -> String {
        let filters = self.filters.clone();
        let view = self.view();
        render_grid(&view, &filters, watchlist, cards)
    }

    /// Toggle a catalog movie on the parent's watchlist.
    ///
    /// Returns the new membership, or `None` if the id isn't in the catalog.
    pub fn toggle_watchlist(&self, watchlist: &mut dyn Watchlist, id: MovieId) -> Option<bool> {
        if !self.catalog.iter().any(|m| m.id == id) {
            warn!("Cannot toggle movie {}: not in the catalog", id);
            return None;
        }

        let on_list = watchlist.toggle(id);
        info!(
            "Movie {} {} watchlist",
            id,
            if on_list { "added to" } else { "removed from" }
        );
        Some(on_list)
    }

    /// How many times the filters have actually been re-run
    pub fn recompute_count(&self) -> usize {
        self.engine.recompute_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watchlist::InMemoryWatchlist;
    use pipeline::{Genre, RatingBand};
    use std::io::Write;
    use std::path::PathBuf;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    const CATALOG: &str = r#"[
        {"id": 1, "title": "Bat Man", "year": 1989, "genre": "Action", "rating": 9, "image": "1.jpg"},
        {"id": 2, "title": "Sad Tale", "year": 2001, "genre": "Drama", "rating": 4, "image": "2.jpg"}
    ]"#;

    async fn loaded_grid() -> MoviesGrid {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let mut grid = MoviesGrid::new(CatalogSource::File(file.path().to_path_buf()));
        grid.load().await;
        grid
    }

    fn ids(view: &GridView<'_>) -> Vec<MovieId> {
        match view {
            GridView::Movies(movies) => movies.iter().map(|m| m.id).collect(),
            _ => vec![],
        }
    }

    // ============================================================================
    // View
    // ============================================================================

    #[test]
    fn test_view_before_load_is_loading() {
        let mut grid = MoviesGrid::new(CatalogSource::default());
        assert_eq!(grid.view(), GridView::Loading);
        assert_eq!(grid.recompute_count(), 0);
    }

    #[tokio::test]
    async fn test_default_filters_show_everything() {
        let mut grid = loaded_grid().await;
        assert_eq!(grid.load_state(), LoadState::Ready);
        assert_eq!(ids(&grid.view()), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_setters_narrow_the_view() {
        let mut grid = loaded_grid().await;

        grid.set_genre(GenreSelection::Only(Genre::Action));
        assert_eq!(ids(&grid.view()), vec![1]);

        grid.set_genre(GenreSelection::All);
        grid.set_rating(RatingSelection::Band(RatingBand::Bad));
        assert_eq!(ids(&grid.view()), vec![2]);

        grid.set_rating(RatingSelection::All);
        grid.set_search("sad");
        assert_eq!(ids(&grid.view()), vec![2]);
    }

    #[tokio::test]
    async fn test_no_matches_is_not_loading() {
        let mut grid = loaded_grid().await;
        grid.set_genre(GenreSelection::Only(Genre::Horror));

        let view = grid.view();
        assert_eq!(view, GridView::NoMatches);
        assert_eq!(view.visible_count(), 0);
    }

    #[tokio::test]
    async fn test_repeated_views_do_not_recompute() {
        let mut grid = loaded_grid().await;

        grid.view();
        grid.view();
        assert_eq!(grid.recompute_count(), 1);

        // Same value set again: still a cache hit
        grid.set_search("");
        grid.view();
        assert_eq!(grid.recompute_count(), 1);

        grid.set_search("bat");
        grid.view();
        assert_eq!(grid.recompute_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_shows_no_matches() {
        let mut grid = MoviesGrid::new(CatalogSource::File(PathBuf::from("/no/such/movies.json")));
        grid.load().await;

        assert_eq!(grid.load_state(), LoadState::Failed);
        assert!(grid.catalog().is_empty());
        assert_eq!(grid.view(), GridView::NoMatches);
    }

    // ============================================================================
    // Watchlist
    // ============================================================================

    #[tokio::test]
    async fn test_toggle_watchlist() {
        let grid = loaded_grid().await;
        let mut watchlist = InMemoryWatchlist::new();

        assert_eq!(grid.toggle_watchlist(&mut watchlist, 1), Some(true));
        assert!(watchlist.contains(1));
        assert_eq!(grid.toggle_watchlist(&mut watchlist, 1), Some(false));
        assert_eq!(grid.toggle_watchlist(&mut watchlist, 99), None);
        assert!(watchlist.is_empty());
    }
}
