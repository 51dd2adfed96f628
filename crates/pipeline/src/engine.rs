//! # Filter Engine
//!
//! Turns (catalog, filter state) into the visible subset, and remembers the
//! answer so it is only recomputed when one of those inputs changes.
//!
//! The cache key is the catalog's identity (the `Arc` allocation, not its
//! contents) plus the filter state by value. Re-rendering with the same
//! catalog and an equal state reuses the cached positions, even if the
//! state was rebuilt from scratch in between.

use crate::filter_pipeline::FilterPipeline;
use crate::state::FilterState;
use data_loader::{Catalog, Movie};
use std::sync::Arc;
use tracing::debug;

/// Records of `catalog` that pass every filter in `state`, in catalog order.
pub fn filter_catalog<'a>(catalog: &'a [Movie], state: &FilterState) -> Vec<&'a Movie> {
    FilterPipeline::for_state(state)
        .apply(catalog)
        .into_iter()
        .map(|idx| &catalog[idx])
        .collect()
}

struct CachedResult {
    catalog: Catalog,
    state: FilterState,
    visible: Vec<usize>,
}

/// Memo cell around the filter pipeline
#[derive(Default)]
pub struct FilterEngine {
    cached: Option<CachedResult>,
    recomputes: usize,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions of the visible records, recomputed only if the catalog or
    /// the state differs from the previous call.
    pub fn visible(&mut self, catalog: &Catalog, state: &FilterState) -> &[usize] {
        let fresh = self
            .cached
            .as_ref()
            .is_some_and(|c| Arc::ptr_eq(&c.catalog, catalog) && c.state == *state);

        if !fresh {
            let visible = FilterPipeline::for_state(state).apply(catalog);
            self.recomputes += 1;
            debug!(
                "Recomputed visible movies: {} of {} (search={:?}, genre={}, rating={})",
                visible.len(),
                catalog.len(),
                state.search,
                state.genre,
                state.rating
            );
            self.cached = Some(CachedResult {
                catalog: Arc::clone(catalog),
                state: state.clone(),
                visible,
            });
        }

        match &self.cached {
            Some(cached) => &cached.visible,
            None => &[],
        }
    }

    /// Same as [`FilterEngine::visible`], resolved to the records themselves.
    pub fn visible_movies<'a>(&mut self, catalog: &'a Catalog, state: &FilterState) -> Vec<&'a Movie> {
        self.visible(catalog, state)
            .iter()
            .map(|&idx| &catalog[idx])
            .collect()
    }

    /// How many times the pipeline has actually run
    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Genre, GenreSelection};

    fn create_test_catalog() -> Catalog {
        Arc::from(vec![
            Movie::new(1, "Bat Man", 1989, "Action", 9.0, "1.jpg"),
            Movie::new(2, "Sad Tale", 2001, "Drama", 4.0, "2.jpg"),
        ])
    }

    #[test]
    fn test_unchanged_inputs_reuse_result() {
        let catalog = create_test_catalog();
        let state = FilterState::default();
        let mut engine = FilterEngine::new();

        assert_eq!(engine.visible(&catalog, &state), &[0, 1]);
        assert_eq!(engine.visible(&catalog, &state), &[0, 1]);
        assert_eq!(engine.visible(&catalog, &state.clone()), &[0, 1]);

        assert_eq!(engine.recompute_count(), 1);
    }

    #[test]
    fn test_state_change_recomputes() {
        let catalog = create_test_catalog();
        let mut state = FilterState::default();
        let mut engine = FilterEngine::new();

        engine.visible(&catalog, &state);
        state.genre = GenreSelection::Only(Genre::Action);
        assert_eq!(engine.visible(&catalog, &state), &[0]);
        assert_eq!(engine.recompute_count(), 2);

        state.search = "sad".to_string();
        assert!(engine.visible(&catalog, &state).is_empty());
        assert_eq!(engine.recompute_count(), 3);
    }

    #[test]
    fn test_catalog_identity_change_recomputes() {
        let first = create_test_catalog();
        let second = create_test_catalog();
        let state = FilterState::default();
        let mut engine = FilterEngine::new();

        engine.visible(&first, &state);
        engine.visible(&Arc::clone(&first), &state);
        assert_eq!(engine.recompute_count(), 1);

        // Equal contents, different allocation
        engine.visible(&second, &state);
        assert_eq!(engine.recompute_count(), 2);
    }

    #[test]
    fn test_visible_movies_resolves_records() {
        let catalog = create_test_catalog();
        let state = FilterState {
            search: "SAD".to_string(),
            ..FilterState::default()
        };
        let mut engine = FilterEngine::new();

        let movies = engine.visible_movies(&catalog, &state);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, 2);
    }

    #[test]
    fn test_filter_catalog_is_deterministic() {
        let catalog = create_test_catalog();
        let state = FilterState {
            search: "a".to_string(),
            ..FilterState::default()
        };

        let first: Vec<u32> = filter_catalog(&catalog, &state).iter().map(|m| m.id).collect();
        let second: Vec<u32> = filter_catalog(&catalog, &state).iter().map(|m| m.id).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 2]);
    }
}
