mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use data_loader::{CatalogSource, DEFAULT_CATALOG, LoadState, Movie, MovieId, PendingCatalog};
use grid::{InMemoryWatchlist, MoviesGrid, TerminalCard};
use pipeline::{GenreSelection, RatingSelection};
use std::io::Write;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::commands::{Command, HELP, parse_command};

/// movies-grid - Browse a movie catalog
#[derive(Parser)]
#[command(name = "movies-grid")]
#[command(about = "Browse a movie catalog with search, genre and rating filters", long_about = None)]
struct Cli {
    /// Catalog location: a JSON file path or an http(s) URL
    #[arg(short, long, default_value = DEFAULT_CATALOG)]
    source: String,

    /// Show only titles containing this text (case-insensitive)
    #[arg(long, default_value = "")]
    search: String,

    /// Genre option: "All genres", Action, Drama, Fantasy or Horror
    #[arg(long, default_value = GenreSelection::ALL_LABEL)]
    genre: GenreSelection,

    /// Rating option: "All ratings", Good, Ok or Bad
    #[arg(long, default_value = RatingSelection::ALL_LABEL)]
    rating: RatingSelection,

    /// Movie id to start on the watchlist (repeatable)
    #[arg(long = "watch")]
    watch: Vec<MovieId>,

    /// Keep reading commands from stdin after the first render
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the grid itself
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut grid = MoviesGrid::new(CatalogSource::parse(&cli.source));
    grid.set_search(cli.search);
    grid.set_genre(cli.genre);
    grid.set_rating(cli.rating);

    let watchlist: InMemoryWatchlist = cli.watch.into_iter().collect();

    if cli.interactive {
        run_interactive(grid, watchlist).await
    } else {
        run_once(grid, watchlist).await
    }
}

/// Load, render once, exit
async fn run_once(mut grid: MoviesGrid, watchlist: InMemoryWatchlist) -> Result<()> {
    let start = Instant::now();
    grid.load().await;
    if grid.load_state() == LoadState::Ready {
        println!(
            "{} Loaded {} movies in {:?}",
            "✓".green(),
            grid.catalog().len(),
            start.elapsed()
        );
    }

    print!("{}", grid.render(&watchlist, &TerminalCard));
    Ok(())
}

/// Wait for the in-flight catalog, or forever if there is none
async fn next_catalog(pending: &mut Option<PendingCatalog>) -> data_loader::Result<Vec<Movie>> {
    match pending {
        Some(pending) => pending.await,
        None => std::future::pending().await,
    }
}

/// Event loop: the catalog fetch and user commands interleave on one thread.
///
/// Commands typed before the catalog arrives still update the filters; they
/// take effect in the first render after loading completes.
async fn run_interactive(mut grid: MoviesGrid, mut watchlist: InMemoryWatchlist) -> Result<()> {
    let mut pending = grid.activate();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP.dimmed());
    show(&mut grid, &watchlist)?;

    loop {
        tokio::select! {
            result = next_catalog(&mut pending) => {
                pending = None;
                grid.receive_catalog(result);
                show(&mut grid, &watchlist)?;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };

                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(command) => {
                        apply_command(&mut grid, &mut watchlist, command);
                        show(&mut grid, &watchlist)?;
                    }
                    Err(e) => eprintln!("{} {}", "✗".red(), e),
                }
            }
        }
    }

    info!("Exiting with {} movies on the watchlist", watchlist.len());
    Ok(())
}

fn apply_command(grid: &mut MoviesGrid, watchlist: &mut InMemoryWatchlist, command: Command) {
    match command {
        Command::Search(text) => grid.set_search(text),
        Command::Genre(genre) => grid.set_genre(genre),
        Command::Rating(rating) => grid.set_rating(rating),
        Command::Watch(id) => {
            if grid.toggle_watchlist(watchlist, id).is_none() {
                warn!("Movie {} is not in the catalog", id);
            }
        }
        Command::Show | Command::Help | Command::Quit => {}
    }
}

fn show(grid: &mut MoviesGrid, watchlist: &InMemoryWatchlist) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\n{}> ", grid.render(watchlist, &TerminalCard))
        .context("Failed to write grid")?;
    stdout.flush().context("Failed to flush stdout")
}
