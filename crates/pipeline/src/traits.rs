//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to the catalog.

use data_loader::Movie;

/// A single predicate over movie records.
///
/// Filters never fail and never reorder. The pipeline hands each filter the
/// positions (into the catalog) that survived the previous stage, so
/// chaining filters is a logical AND.
///
/// `Send + Sync` allows filters to be shared with a background task.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single record passes this filter
    fn matches(&self, movie: &Movie) -> bool;

    /// Keep the candidate positions whose records pass.
    ///
    /// # Arguments
    /// * `catalog` - The full catalog the positions index into
    /// * `candidates` - Positions still visible, in catalog order
    fn apply(&self, catalog: &[Movie], candidates: Vec<usize>) -> Vec<usize> {
        candidates
            .into_iter()
            .filter(|&idx| self.matches(&catalog[idx]))
            .collect()
    }
}
