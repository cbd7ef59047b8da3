//! A single browsing session: state, intents, and the one catalog fetch.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use storefront_products::{BrowseState, Intent, ReadModels, Transition, update};

use crate::source::{CatalogSource, FetchError};

type FetchOutcome = Result<Vec<storefront_products::Product>, FetchError>;

/// Owns the browsing state for as long as a view is mounted.
///
/// The catalog fetch starts with the session and runs on the tokio runtime.
/// Its result is applied by [`BrowseSession::settle`]; once the session is
/// closed (or its [`SessionHandle`] cancelled, or the session dropped) the
/// fetch is aborted and any late result is discarded.
#[derive(Debug)]
pub struct BrowseSession {
    state: BrowseState,
    fetch: Option<JoinHandle<FetchOutcome>>,
    cancel: CancellationToken,
}

/// Cloneable teardown handle, usable from outside the task owning the session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    cancel: CancellationToken,
}

impl SessionHandle {
    /// Tear the session down: abort the in-flight fetch and drop its result.
    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl BrowseSession {
    /// Start a session and its catalog fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(source: Arc<dyn CatalogSource>) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let fetch = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => Err(FetchError::Cancelled),
                outcome = source.fetch_products() => outcome,
            }
        });

        tracing::debug!("browse session started");

        Self {
            state: BrowseState::new(),
            fetch: Some(fetch),
            cancel,
        }
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            cancel: self.cancel.clone(),
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Read models for the current state.
    pub fn views(&self) -> ReadModels {
        self.state.views()
    }

    /// Whether the catalog fetch has not been settled yet.
    pub fn is_loading(&self) -> bool {
        self.fetch.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Apply a UI intent and return the resulting read models.
    pub fn dispatch(&mut self, intent: Intent) -> ReadModels {
        let state = std::mem::take(&mut self.state);
        let Transition { state, views } = update(state, intent);
        self.state = state;
        views
    }

    /// Wait for the catalog fetch and apply its outcome.
    ///
    /// A failed fetch is logged and leaves the product collection empty. A
    /// fetch that finishes after the session was closed is discarded. Once the
    /// fetch is settled this returns immediately.
    pub async fn settle(&mut self) -> ReadModels {
        if let Some(fetch) = self.fetch.take() {
            let outcome = match fetch.await {
                Ok(outcome) => outcome,
                Err(err) if err.is_cancelled() => Err(FetchError::Cancelled),
                Err(err) => Err(FetchError::Task(err.to_string())),
            };
            self.apply_fetch(outcome);
        }
        self.views()
    }

    /// Tear the session down (same as [`SessionHandle::close`]).
    pub fn close(&mut self) {
        self.cancel.cancel();
        if let Some(fetch) = self.fetch.take() {
            fetch.abort();
            tracing::debug!("in-flight catalog fetch aborted");
        }
    }

    fn apply_fetch(&mut self, outcome: FetchOutcome) {
        if self.is_closed() {
            tracing::debug!("session closed; discarding catalog fetch result");
            return;
        }

        match outcome {
            Ok(products) => {
                tracing::info!(products = products.len(), "product catalog loaded");
                self.dispatch(Intent::CatalogLoaded(products));
            }
            Err(FetchError::Cancelled) => {
                tracing::debug!("catalog fetch cancelled");
            }
            Err(err) => {
                tracing::error!(error = %err, "catalog fetch failed; product collection stays empty");
            }
        }
    }
}

impl Drop for BrowseSession {
    fn drop(&mut self) {
        self.close();
    }
}
