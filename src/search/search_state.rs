use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::api::types::{ApiRequest, ApiResponse, SearchPage, Story};

/// Accumulated stories plus the page number of the newest fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub items: Vec<Story>,
    pub page: u32,
}

/// Manages the search lifecycle: query text, fetched results, paging,
/// and failure.
///
/// All mutation happens through [`submit_query`](Self::submit_query),
/// [`load_next_page`](Self::load_next_page),
/// [`dismiss`](Self::dismiss), [`set_query`](Self::set_query), and the
/// response handling in [`poll_responses`](Self::poll_responses).
#[derive(Debug)]
pub struct SearchState {
    /// Live query text, synced from the input field on every edit
    query: String,
    /// `None` until the first response lands
    pub results: Option<ResultSet>,
    /// Whether a request is in flight
    pub is_loading: bool,
    /// Failure message. Once set the session only shows the failure view;
    /// there is no retry path.
    pub error: Option<String>,
    /// Page number of the most recent request, drives the spinner label
    pending_page: u32,
    /// Id of the most recent request. Responses carrying any other id were
    /// overtaken by a newer submission and get dropped.
    request_id: u64,
    request_tx: Option<Sender<ApiRequest>>,
    response_rx: Option<Receiver<ApiResponse>>,
}

impl SearchState {
    pub fn new(initial_query: &str) -> Self {
        Self {
            query: initial_query.to_string(),
            results: None,
            is_loading: false,
            error: None,
            pending_page: 0,
            request_id: 0,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Wires the worker channels. Until this is called, submissions are
    /// dropped silently.
    pub fn set_channels(
        &mut self,
        request_tx: Sender<ApiRequest>,
        response_rx: Receiver<ApiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Syncs the query text from the input field. Takes effect on the next
    /// submission or page fetch; an in-flight request is not restarted.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Number of stories currently held.
    pub fn result_count(&self) -> usize {
        self.results.as_ref().map_or(0, |results| results.items.len())
    }

    pub fn story_at(&self, index: usize) -> Option<&Story> {
        self.results.as_ref().and_then(|results| results.items.get(index))
    }

    /// Page number of the request currently in flight.
    pub fn pending_page(&self) -> u32 {
        self.pending_page
    }

    /// Starts a fresh search for the current query text from page zero.
    pub fn submit_query(&mut self) {
        self.fetch_page(0);
    }

    /// Fetches the page after the newest one already loaded, using the
    /// current query text. Ignored while a request is in flight and before
    /// the first result set exists.
    pub fn load_next_page(&mut self) {
        if self.is_loading {
            return;
        }
        let Some(results) = &self.results else { return };
        self.fetch_page(results.page.saturating_add(1));
    }

    /// Removes every story with the given id. Unknown ids are a no-op, as
    /// is dismissing before the first results arrive.
    pub fn dismiss(&mut self, id: &str) {
        if let Some(results) = &mut self.results {
            results.items.retain(|story| story.id != id);
        }
    }

    fn fetch_page(&mut self, page: u32) {
        if self.error.is_some() {
            return;
        }
        let Some(request_tx) = &self.request_tx else { return };

        self.request_id = self.request_id.wrapping_add(1);
        self.pending_page = page;
        self.is_loading = true;
        log::debug!(
            "search: requesting page {page} for {:?} (request {})",
            self.query,
            self.request_id
        );

        let request = ApiRequest::Search {
            query: self.query.clone(),
            page,
            request_id: self.request_id,
        };
        // A send failure means the worker is gone; surface it like a fetch
        // failure.
        if request_tx.send(request).is_err() {
            self.error = Some("search worker is not running".to_string());
        }
    }

    /// Drains worker responses. Called once per event-loop tick.
    pub fn poll_responses(&mut self) {
        loop {
            let received = match &self.response_rx {
                Some(response_rx) => response_rx.try_recv(),
                None => return,
            };

            match received {
                Ok(response) => self.apply_response(response),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.response_rx = None;
                    return;
                }
            }
        }
    }

    fn apply_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Loaded { page, request_id } => {
                if request_id != self.request_id {
                    log::debug!(
                        "search: dropping stale response {request_id} (current {})",
                        self.request_id
                    );
                    return;
                }
                self.reconcile(page);
                self.is_loading = false;
            }
            ApiResponse::Failed { message, request_id } => {
                if request_id != self.request_id {
                    return;
                }
                log::debug!("search: request {request_id} failed: {message}");
                // `is_loading` stays set on failure; the failure view
                // replaces the whole screen, so the flag is never read again.
                self.error = Some(message);
            }
        }
    }

    /// Folds a fetched page into the result set. Page zero replaces
    /// whatever is held; later pages append without deduplication.
    fn reconcile(&mut self, page: SearchPage) {
        let results = self.results.get_or_insert_with(ResultSet::default);
        if page.page == 0 {
            results.items = page.hits;
        } else {
            results.items.extend(page.hits);
        }
        results.page = page.page;
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
