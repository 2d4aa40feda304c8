//! Search worker thread
//!
//! Runs fetches in a background thread so the UI never blocks on the
//! network. Receives requests over a channel, calls the search endpoint,
//! and sends the decoded page (or the failure) back tagged with the id of
//! the request it answers.

use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use super::client::SearchClient;
use super::types::{ApiRequest, ApiResponse};

/// Spawn the fetch worker thread.
///
/// The thread owns a single-threaded tokio runtime and processes requests
/// one at a time in arrival order. It exits when the request channel closes.
pub fn spawn_worker(
    client: SearchClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) -> std::io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("hns-fetch".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(client, request_rx, response_tx));
        })?;

    Ok(())
}

async fn worker_loop(
    client: SearchClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let ApiRequest::Search {
            query,
            page,
            request_id,
        } = request;
        log::debug!("worker: fetching page {page} for {query:?} (request {request_id})");

        let response = match client.search(&query, page).await {
            Ok(results) => ApiResponse::Loaded {
                page: results,
                request_id,
            },
            Err(e) => ApiResponse::Failed {
                message: e.to_string(),
                request_id,
            },
        };

        // A closed response channel means the UI is gone; stop working.
        if response_tx.send(response).is_err() {
            break;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
