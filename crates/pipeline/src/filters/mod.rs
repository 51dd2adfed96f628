//! Filter implementations for the catalog pipeline.
//!
//! One filter per control. Each honours its own "show everything" value,
//! so a pipeline built from the default state keeps the whole catalog.

pub mod genre;
pub mod rating_band;
pub mod search;

// Re-export for convenience
pub use genre::GenreFilter;
pub use rating_band::RatingBandFilter;
pub use search::SearchFilter;
