//! One-shot catalog loading.
//!
//! The loader walks `Idle -> Loading -> {Ready, Failed}` exactly once.
//! `Ready` and `Failed` are terminal: nothing retries a failed load and
//! nothing re-fetches a loaded catalog.
//!
//! Retrieval runs as a spawned task and hands its result back through a
//! oneshot channel. Whoever owns the [`PendingCatalog`] decides when to
//! apply it with [`CatalogLoader::complete`]. If the owner is gone by the
//! time the task finishes, the result is dropped on the floor.

use crate::error::{CatalogLoadError, Result};
use crate::source::{CatalogSource, fetch_catalog};
use crate::types::{Catalog, Movie, empty_catalog};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

/// Lifecycle of the catalog load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

impl LoadState {
    /// True once the load has finished, successfully or not
    pub fn is_complete(self) -> bool {
        matches!(self, LoadState::Ready | LoadState::Failed)
    }
}

/// Handle to an in-flight retrieval.
///
/// Resolves to the fetched records or the reason the fetch failed. Dropping
/// it abandons the result without cancelling the request.
#[derive(Debug)]
pub struct PendingCatalog {
    rx: oneshot::Receiver<Result<Vec<Movie>>>,
}

impl Future for PendingCatalog {
    type Output = Result<Vec<Movie>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(CatalogLoadError::Interrupted)))
    }
}

/// Owns the load state for one catalog source
#[derive(Debug)]
pub struct CatalogLoader {
    source: CatalogSource,
    state: LoadState,
}

impl CatalogLoader {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Issue the one and only retrieval.
    ///
    /// Must be called from inside a tokio runtime. Returns `None` if a load
    /// has already been started.
    pub fn start(&mut self) -> Option<PendingCatalog> {
        if self.state != LoadState::Idle {
            debug!(
                "Catalog load already {:?}, not fetching {} again",
                self.state, self.source
            );
            return None;
        }

        self.state = LoadState::Loading;
        info!("Loading catalog from {}", self.source);

        let (tx, rx) = oneshot::channel();
        let source = self.source.clone();
        tokio::spawn(async move {
            let result = fetch_catalog(&source).await;
            if tx.send(result).is_err() {
                debug!("Catalog from {} arrived after its consumer went away, discarding", source);
            }
        });

        Some(PendingCatalog { rx })
    }

    /// Apply the retrieval outcome.
    ///
    /// Returns the catalog to install: the fetched records on success, an
    /// empty catalog on failure. Failures are logged here and go no further.
    /// Returns `None` when no load is in flight.
    pub fn complete(&mut self, result: Result<Vec<Movie>>) -> Option<Catalog> {
        if self.state != LoadState::Loading {
            warn!(
                "Ignoring catalog result while load is {:?}",
                self.state
            );
            return None;
        }

        match result {
            Ok(movies) => {
                info!("Loaded {} movies from {}", movies.len(), self.source);
                self.state = LoadState::Ready;
                Some(Arc::from(movies))
            }
            Err(e) => {
                error!("Failed to load catalog from {}: {}", self.source, e);
                self.state = LoadState::Failed;
                Some(empty_catalog())
            }
        }
    }

    /// Start the load and wait for it, for callers with nothing else to do
    /// in the meantime.
    pub async fn load(&mut self) -> Option<Catalog> {
        let pending = self.start()?;
        let result = pending.await;
        self.complete(result)
    }
}
