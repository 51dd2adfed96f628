//! Text rendering of the grid.
//!
//! Cards are pluggable through [`CardRenderer`]; the surrounding layout
//! (loading message, count header, controls, empty-result message) is
//! fixed here.

use colored::Colorize;
use data_loader::Movie;
use pipeline::{FilterState, GenreSelection, RatingBand, RatingSelection};
use std::fmt::Write;

use crate::component::GridView;
use crate::watchlist::Watchlist;

pub const LOADING_MESSAGE: &str = "Loading movies...";
pub const NO_MATCHES_MESSAGE: &str = "No movies found";

/// Renders one movie card
pub trait CardRenderer {
    fn render_card(&self, movie: &Movie, in_watchlist: bool) -> String;
}

/// One-line colored card for terminals
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalCard;

impl CardRenderer for TerminalCard {
    fn render_card(&self, movie: &Movie, in_watchlist: bool) -> String {
        let marker = if in_watchlist {
            "★".yellow()
        } else {
            "☆".dimmed()
        };
        let band = RatingBand::of(movie.rating);
        let band_label = match band {
            RatingBand::Good => band.label().green(),
            RatingBand::Ok => band.label().yellow(),
            RatingBand::Bad => band.label().red(),
        };

        format!(
            "{} {} {} ({}) {} · {:.1} {} [{}]",
            marker,
            format!("#{}", movie.id).dimmed(),
            movie.title.bold(),
            movie.year,
            movie.genre,
            movie.rating,
            band_label,
            movie.image
        )
    }
}

/// Option list with the current selection bracketed
fn option_row<T: PartialEq + Copy>(options: impl Iterator<Item = T>, current: T, label: fn(T) -> &'static str) -> String {
    options
        .map(|option| {
            if option == current {
                format!("[{}]", label(option)).cyan().to_string()
            } else {
                label(option).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the full grid for a view.
pub fn render_grid(
    view: &GridView<'_>,
    filters: &FilterState,
    watchlist: &dyn Watchlist,
    cards: &dyn CardRenderer,
) -> String {
    if let GridView::Loading = view {
        return format!("{}\n", LOADING_MESSAGE);
    }

    let mut out = String::new();
    // Writing to a String can't fail
    let _ = writeln!(
        out,
        "{}",
        format!("Total Movies: {}", view.visible_count()).bold().blue()
    );
    let _ = writeln!(out, "Search: {:?}", filters.search);
    let _ = writeln!(
        out,
        "Genre:  {}",
        option_row(GenreSelection::options(), filters.genre, GenreSelection::label)
    );
    let _ = writeln!(
        out,
        "Rating: {}",
        option_row(RatingSelection::options(), filters.rating, RatingSelection::label)
    );
    out.push('\n');

    match view {
        GridView::Movies(movies) => {
            for movie in movies {
                let _ = writeln!(out, "{}", cards.render_card(movie, watchlist.contains(movie.id)));
            }
        }
        GridView::NoMatches | GridView::Loading => {
            let _ = writeln!(out, "{}", NO_MATCHES_MESSAGE);
        }
    }

    out
}
