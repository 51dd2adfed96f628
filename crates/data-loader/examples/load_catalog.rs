use data_loader::{CatalogLoader, CatalogSource, LoadState, empty_catalog};
use std::env;
use std::time::Instant;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let location = env::args().nth(1).unwrap_or_else(|| "movies.json".to_string());
    let mut loader = CatalogLoader::new(CatalogSource::parse(&location));

    println!("Loading catalog from {}...\n", loader.source());

    let start = Instant::now();
    let catalog = loader.load().await.unwrap_or_else(empty_catalog);
    let elapsed = start.elapsed();

    println!("=== Load {} ===", if loader.state() == LoadState::Ready { "Complete" } else { "Failed" });
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.len());
}
