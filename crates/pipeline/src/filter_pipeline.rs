//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{GenreFilter, RatingBandFilter, SearchFilter};
use crate::state::FilterState;
use crate::traits::Filter;
use data_loader::Movie;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new(GenreSelection::Only(Genre::Action)))
///     .add_filter(SearchFilter::new("bat"));
///
/// let visible = pipeline.apply(&catalog);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline for the grid's three controls: genre, rating band, search.
    pub fn for_state(state: &FilterState) -> Self {
        FilterPipeline::new()
            .add_filter(GenreFilter::new(state.genre))
            .add_filter(RatingBandFilter::new(state.rating))
            .add_filter(SearchFilter::new(&state.search))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the whole catalog.
    ///
    /// Returns the positions of the records that passed every filter, in
    /// catalog order. An empty pipeline keeps everything.
    pub fn apply(&self, catalog: &[Movie]) -> Vec<usize> {
        let mut current: Vec<usize> = (0..catalog.len()).collect();
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(catalog, current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
