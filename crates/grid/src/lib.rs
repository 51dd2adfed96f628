//! Grid crate for the movies catalog.
//!
//! This crate contains the component that ties catalog loading, filter
//! state and rendering together, plus the two collaborators it talks to:
//! a card renderer and a watchlist.

pub mod component;
pub mod render;
pub mod watchlist;

pub use component::{GridView, MoviesGrid};
pub use render::{CardRenderer, LOADING_MESSAGE, NO_MATCHES_MESSAGE, TerminalCard, render_grid};
pub use watchlist::{InMemoryWatchlist, Watchlist};
