//! Error types for the pipeline crate.
//!
//! Filtering itself can't fail. The only errors come from turning control
//! text into one of the fixed selections.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown genre option: {0:?}")]
    UnknownGenre(String),

    #[error("Unknown rating option: {0:?}")]
    UnknownRating(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
