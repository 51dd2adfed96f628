//! Commands accepted by the interactive mode.
//!
//! Each line typed at the prompt becomes one [`Command`]. The filter
//! commands map one-to-one onto the grid's setters.

use anyhow::{Result, anyhow};
use data_loader::MovieId;
use pipeline::{GenreSelection, RatingSelection};

pub const HELP: &str = "\
Commands:
  search <text>    filter by title (no text clears the search)
  genre <option>   All genres | Action | Drama | Fantasy | Horror
  rating <option>  All ratings | Good | Ok | Bad
  watch <id>       add or remove a movie from the watchlist
  show             render the grid again
  help             show this message
  quit             exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(String),
    Genre(GenreSelection),
    Rating(RatingSelection),
    Watch(MovieId),
    Show,
    Help,
    Quit,
}

/// Parse one input line.
///
/// Blank lines mean "show". The search text is taken verbatim after the
/// first space so leading and inner whitespace survive.
pub fn parse_command(line: &str) -> Result<Command> {
    if line.trim().is_empty() {
        return Ok(Command::Show);
    }

    let line = line.trim_start();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

    match word.to_lowercase().as_str() {
        "search" | "s" => Ok(Command::Search(rest.to_string())),
        "genre" | "g" => Ok(Command::Genre(rest.parse()?)),
        "rating" | "r" => Ok(Command::Rating(rest.parse()?)),
        "watch" | "w" => {
            let id = rest
                .trim()
                .parse::<MovieId>()
                .map_err(|e| anyhow!("Invalid movie id {:?}: {}", rest.trim(), e))?;
            Ok(Command::Watch(id))
        }
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(anyhow!("Unknown command {:?}, try 'help'", other)),
    }
}
