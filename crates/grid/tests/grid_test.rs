//! End-to-end tests for the grid component.
//!
//! A real catalog file goes through the loader, the filters and the
//! renderer, the same path the CLI takes.

use data_loader::{CatalogSource, LoadState, Movie};
use grid::{
    CardRenderer, GridView, InMemoryWatchlist, LOADING_MESSAGE, MoviesGrid, NO_MATCHES_MESSAGE,
};
use pipeline::{Genre, GenreSelection, RatingSelection};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

const CATALOG: &str = r#"[
    {"id": 1, "title": "Bat Man", "year": 1989, "genre": "Action", "rating": 9, "image": "images/1.jpg"},
    {"id": 2, "title": "Sad Tale", "year": 2001, "genre": "Drama", "rating": 4, "image": "images/2.jpg"},
    {"id": 3, "title": "Elf Road", "year": 2011, "genre": "Fantasy", "rating": 6.5, "image": "images/3.jpg"}
]"#;

struct TitleCard;

impl CardRenderer for TitleCard {
    fn render_card(&self, movie: &Movie, in_watchlist: bool) -> String {
        format!("<{}{}>", movie.title, if in_watchlist { " (watching)" } else { "" })
    }
}

fn catalog_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_load_filter_render() {
    let file = catalog_file();
    let mut grid = MoviesGrid::new(CatalogSource::File(file.path().to_path_buf()));
    let mut watchlist = InMemoryWatchlist::new();

    let pending = grid.activate().unwrap();
    assert_eq!(grid.load_state(), LoadState::Loading);
    assert_eq!(grid.render(&watchlist, &TitleCard), format!("{}\n", LOADING_MESSAGE));

    grid.receive_catalog(pending.await);
    assert_eq!(grid.load_state(), LoadState::Ready);

    grid.toggle_watchlist(&mut watchlist, 3);
    let out = grid.render(&watchlist, &TitleCard);
    assert!(out.contains("<Bat Man>"));
    assert!(out.contains("<Sad Tale>"));
    assert!(out.contains("<Elf Road (watching)>"));

    grid.set_genre("fantasy".parse::<GenreSelection>().unwrap());
    let out = grid.render(&watchlist, &TitleCard);
    assert!(out.contains("<Elf Road (watching)>"));
    assert!(!out.contains("<Bat Man>"));

    grid.set_genre(GenreSelection::Only(Genre::Horror));
    let out = grid.render(&watchlist, &TitleCard);
    assert!(out.contains(NO_MATCHES_MESSAGE));
    assert!(!out.contains(LOADING_MESSAGE));
}

#[tokio::test]
async fn test_filters_set_before_load_apply_after() {
    let file = catalog_file();
    let mut grid = MoviesGrid::new(CatalogSource::File(file.path().to_path_buf()));

    let pending = grid.activate().unwrap();
    grid.set_search("TALE");
    grid.set_rating("bad".parse::<RatingSelection>().unwrap());
    assert_eq!(grid.view(), GridView::Loading);

    grid.receive_catalog(pending.await);

    match grid.view() {
        GridView::Movies(movies) => {
            assert_eq!(movies.len(), 1);
            assert_eq!(movies[0].id, 2);
        }
        other => panic!("expected movies, got {:?}", other),
    }
}

#[tokio::test]
async fn test_retrieval_failure_is_not_fatal() {
    let mut grid = MoviesGrid::new(CatalogSource::File(PathBuf::from("/no/such/movies.json")));
    grid.load().await;

    assert_eq!(grid.load_state(), LoadState::Failed);
    assert_eq!(grid.view(), GridView::NoMatches);

    let out = grid.render(&InMemoryWatchlist::new(), &TitleCard);
    assert!(out.contains(NO_MATCHES_MESSAGE));

    // One-shot: a failed grid never fetches again
    assert!(grid.activate().is_none());
}

#[tokio::test]
async fn test_torn_down_grid_discards_late_catalog() {
    let file = catalog_file();
    let mut grid = MoviesGrid::new(CatalogSource::File(file.path().to_path_buf()));

    let pending = grid.activate().unwrap();
    drop(pending);
    drop(grid);

    // The fetch still completes in the background and must not panic
    tokio::time::sleep(Duration::from_millis(50)).await;
}
