//! Filtering of the movie catalog.
//!
//! This crate provides:
//! - FilterState and the fixed genre / rating options behind the controls
//! - Filter trait and one implementation per control
//! - FilterPipeline for composing filters
//! - FilterEngine, which memoizes the visible subset
//!
//! ## Architecture
//! Every filter sees only what the previous one kept, so the pipeline is
//! the logical AND of its filters. Positions, not records, flow through it,
//! which keeps catalog order for free and lets the engine cache a plain
//! `Vec<usize>`.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterEngine, FilterState, GenreSelection, Genre};
//!
//! let mut engine = FilterEngine::new();
//! let mut state = FilterState::default();
//! state.genre = GenreSelection::Only(Genre::Drama);
//!
//! let visible = engine.visible_movies(&catalog, &state);
//! ```

pub mod error;
pub mod state;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod engine;

// Re-export main types
pub use engine::{FilterEngine, filter_catalog};
pub use error::FilterError;
pub use filter_pipeline::FilterPipeline;
pub use state::{FilterState, Genre, GenreSelection, RatingBand, RatingSelection};
pub use traits::Filter;
