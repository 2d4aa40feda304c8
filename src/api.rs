//! Hacker News search API module
//!
//! Wire types for the Algolia-backed search endpoint, a thin HTTP client,
//! and the background worker thread that keeps fetches off the UI thread.

pub mod client;
pub mod types;
pub mod worker;

pub use client::{DEFAULT_ENDPOINT, HITS_PER_PAGE, SearchClient};
pub use types::{ApiRequest, ApiResponse, SearchPage, Story};
