//! # Data Loader Crate
//!
//! This crate retrieves the movie catalog the grid displays.
//!
//! ## Main Components
//!
//! - **types**: The `Movie` record and the shared `Catalog` type
//! - **parser**: Parse and validate the JSON catalog body
//! - **source**: Fixed catalog locations (file or HTTP) and the fetch itself
//! - **loader**: The one-shot `Idle -> Loading -> {Ready, Failed}` state machine
//! - **error**: Error types for catalog retrieval
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{CatalogLoader, CatalogSource};
//!
//! let mut loader = CatalogLoader::new(CatalogSource::parse("movies.json"));
//! let pending = loader.start().unwrap();
//!
//! // ... handle other events while the fetch runs ...
//!
//! let catalog = loader.complete(pending.await).unwrap();
//! println!("{} movies ({:?})", catalog.len(), loader.state());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod source;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogLoadError, Result};
pub use loader::{CatalogLoader, LoadState, PendingCatalog};
pub use source::{CatalogSource, DEFAULT_CATALOG, fetch_catalog};
pub use types::{Catalog, Movie, MovieId, empty_catalog};
