//! Pagination controller for species searches.
//!
//! One [`SearchController`] owns one search session. Its public methods never
//! wait on the network: they update the state synchronously, spawn the
//! transport call, and return. Responses are applied from the spawned task.
//!
//! # Single flight
//!
//! At most one request is outstanding at a time. `Loading` and
//! `is_loading_more` are the only guards; there is no separate lock around
//! the transport.
//!
//! # Stale responses
//!
//! Requests are never cancelled. Each one is tagged with the session
//! generation at the time it was sent, and the generation is bumped whenever
//! the session is reset (new search, text edit, cleared error, drop). A
//! response whose generation no longer matches is dropped without touching
//! the state.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use crate::client::{GraphQlClient, HttpConfig};
//! use crate::state::{SearchConfig, SearchController, SearchState};
//!
//! let client = Arc::new(GraphQlClient::new(DEFAULT_ENDPOINT, &HttpConfig::default())?);
//! let controller = SearchController::new(client, SearchConfig::default());
//! let mut updates = controller.subscribe();
//!
//! controller.submit_search("pika")?;
//! while let Some(state) = updates.recv().await {
//!     if let SearchState::Success(results) = state {
//!         println!("{} species", results.len());
//!         break;
//!     }
//! }
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::Instant;

use super::aggregate::append;
use super::config::SearchConfig;
use super::sanitize::{Sanitized, sanitize};
use super::search::{SearchResults, SearchState};
use crate::client::{QueryDescriptor, Transport};
use crate::domain::{InputError, SearchError, SearchQuery, SortOrder};

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Default)]
struct Session {
    state: SearchState,
    /// Last sanitized input from `update_text`.
    text: String,
    /// Order used by the next `submit_search`.
    sort_order: SortOrder,
    /// Query of the running search, at page 0.
    query: Option<SearchQuery>,
    /// Last page successfully loaded for `query`.
    current_page: u32,
    generation: u64,
    subscribers: Vec<mpsc::UnboundedSender<SearchState>>,
}

impl Session {
    /// Replace the state and publish it to every live subscriber.
    fn transition(&mut self, next: SearchState) {
        tracing::debug!(
            from = self.state.label(),
            to = next.label(),
            generation = self.generation,
            "Search state transition"
        );
        self.state = next;
        let state = &self.state;
        self.subscribers.retain(|tx| tx.send(state.clone()).is_ok());
    }

    /// Invalidate every outstanding request.
    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn is_current(&self, generation: u64) -> bool {
        if self.generation == generation {
            true
        } else {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Discarding response from superseded search"
            );
            false
        }
    }
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Search Controller
// ============================================================================

/// Drives search, load-more and edit flows for one session.
#[derive(Debug)]
pub struct SearchController<T: Transport> {
    transport: Arc<T>,
    config: SearchConfig,
    session: Arc<Mutex<Session>>,
    runtime: Handle,
}

impl<T: Transport> SearchController<T> {
    /// Creates an idle controller that spawns requests on the current runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    #[must_use]
    pub fn new(transport: Arc<T>, config: SearchConfig) -> Self {
        Self::with_runtime(transport, config, Handle::current())
    }

    /// Creates an idle controller that spawns requests on `runtime`.
    #[must_use]
    pub fn with_runtime(transport: Arc<T>, config: SearchConfig, runtime: Handle) -> Self {
        Self {
            transport,
            config,
            session: Arc::new(Mutex::new(Session::default())),
            runtime,
        }
    }

    // ========================================================================
    // Observation
    // ========================================================================

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        lock(&self.session).state.clone()
    }

    /// Receive every state transition from now on, in order.
    ///
    /// The current state is not replayed; read it with [`Self::state`].
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<SearchState> {
        let (tx, rx) = mpsc::unbounded_channel();
        lock(&self.session).subscribers.push(tx);
        rx
    }

    /// Last sanitized text passed to [`Self::update_text`].
    #[must_use]
    pub fn text(&self) -> String {
        lock(&self.session).text.clone()
    }

    /// Index of the last page loaded for the running search.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        lock(&self.session).current_page
    }

    // ========================================================================
    // Sort Order
    // ========================================================================

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        lock(&self.session).sort_order
    }

    /// Set the order for the next search. A running session keeps its order.
    pub fn set_sort_order(&self, sort_order: SortOrder) {
        lock(&self.session).sort_order = sort_order;
    }

    /// Flip the order for the next search and return the new value.
    pub fn toggle_sort_order(&self) -> SortOrder {
        let mut session = lock(&self.session);
        session.sort_order = session.sort_order.toggled();
        session.sort_order
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Start a new search for `name`.
    ///
    /// The name is sanitized first. On success the state is `Loading` when
    /// this returns and the first page is fetched in the background.
    ///
    /// # Errors
    ///
    /// - `SearchError::InvalidInput` if nothing searchable is left after
    ///   sanitizing. The transport is not called and the state is unchanged.
    /// - `SearchError::RequestInFlight` if a search or load-more is
    ///   outstanding.
    pub fn submit_search(&self, name: &str) -> Result<(), SearchError> {
        let sanitized = sanitize(name);
        if sanitized.is_blank() {
            let err = if name.trim().is_empty() {
                InputError::Empty
            } else {
                InputError::InvalidCharacters
            };
            tracing::debug!("Search input rejected: {err}");
            return Err(err.into());
        }

        let (generation, query) = {
            let mut session = lock(&self.session);
            if session.state.is_busy() {
                return Err(SearchError::RequestInFlight);
            }
            session.bump_generation();
            session.current_page = 0;
            let query = SearchQuery::new(sanitized.cleaned, session.sort_order);
            session.query = Some(query.clone());
            session.transition(SearchState::Loading);
            (session.generation, query)
        };

        tracing::info!(
            generation,
            name = %query.name,
            order = query.sort_order.as_str(),
            "Starting species search"
        );

        let started = Instant::now();
        let min_loading = self.config.min_loading();
        let descriptor = QueryDescriptor::for_query(&query, self.config.page_size());
        let transport = Arc::clone(&self.transport);
        let session = Arc::clone(&self.session);

        self.runtime.spawn(async move {
            match transport.execute(descriptor).await {
                Ok(page) => {
                    let mut guard = lock(&session);
                    if !guard.is_current(generation) {
                        return;
                    }
                    tracing::info!(generation, count = page.len(), "Search completed");
                    guard.transition(SearchState::Success(SearchResults::first_page(page)));
                }
                Err(err) => {
                    tracing::warn!(generation, kind = ?err.kind(), "Search failed: {err}");
                    if let Some(remaining) = min_loading.checked_sub(started.elapsed()) {
                        tokio::time::sleep(remaining).await;
                    }
                    let mut guard = lock(&session);
                    if !guard.is_current(generation) {
                        return;
                    }
                    guard.transition(SearchState::Error {
                        message: err.to_string(),
                    });
                }
            }
        });

        Ok(())
    }

    /// Fetch the next page of the running search.
    ///
    /// Does nothing unless the state is `Success` with `has_next_page` set
    /// and no load-more outstanding. A failure keeps the loaded results and
    /// sets `load_more_error`; calling again retries the same page.
    pub fn load_more(&self) {
        let (generation, query) = {
            let mut guard = lock(&self.session);
            let session = &mut *guard;
            let SearchState::Success(results) = &session.state else {
                return;
            };
            if !results.can_load_more() {
                return;
            }
            let Some(active) = &session.query else {
                return;
            };
            let query = active.at_page(session.current_page.saturating_add(1));
            let loading = SearchResults {
                is_loading_more: true,
                ..results.clone()
            };
            session.transition(SearchState::Success(loading));
            (session.generation, query)
        };

        tracing::debug!(generation, page = query.page, "Loading next page");

        let descriptor = QueryDescriptor::for_query(&query, self.config.page_size());
        let transport = Arc::clone(&self.transport);
        let session = Arc::clone(&self.session);

        self.runtime.spawn(async move {
            let result = transport.execute(descriptor).await;

            let mut guard = lock(&session);
            if !guard.is_current(generation) {
                return;
            }
            let SearchState::Success(current) = &guard.state else {
                return;
            };
            let current = current.clone();

            let next = match result {
                Ok(page) if page.is_empty() => {
                    tracing::info!(generation, page = query.page, "No more results");
                    SearchResults {
                        has_next_page: false,
                        is_loading_more: false,
                        load_more_error: false,
                        ..current
                    }
                }
                Ok(page) => {
                    tracing::info!(
                        generation,
                        page = query.page,
                        count = page.len(),
                        "Loaded next page"
                    );
                    guard.current_page = query.page;
                    SearchResults {
                        results: append(current.results, page),
                        has_next_page: true,
                        has_searched: true,
                        is_new_search: false,
                        is_loading_more: false,
                        load_more_error: false,
                    }
                }
                Err(err) => {
                    tracing::warn!(generation, page = query.page, "Load more failed: {err}");
                    SearchResults {
                        is_loading_more: false,
                        load_more_error: true,
                        ..current
                    }
                }
            };

            guard.transition(SearchState::Success(next));
        });
    }

    /// Record an edit to the search text.
    ///
    /// A displayed result or error is dismissed (state becomes `Idle`) so it
    /// does not linger while the user types. The page counter is left alone
    /// until the next search.
    pub fn update_text(&self, text: &str) -> Sanitized {
        let sanitized = sanitize(text);
        let mut session = lock(&self.session);
        session.text.clone_from(&sanitized.cleaned);
        if matches!(
            session.state,
            SearchState::Success(_) | SearchState::Error { .. }
        ) {
            session.bump_generation();
            session.transition(SearchState::Idle);
        }
        sanitized
    }

    /// Dismiss an `Error` state. No-op in any other state.
    pub fn clear_error(&self) {
        let mut session = lock(&self.session);
        if let SearchState::Error { .. } = session.state {
            session.bump_generation();
            session.transition(SearchState::Idle);
        }
    }
}

impl<T: Transport> Drop for SearchController<T> {
    fn drop(&mut self) {
        let mut session = lock(&self.session);
        session.bump_generation();
        session.subscribers.clear();
    }
}
