//! Search lifecycle module
//!
//! Owns the submitted query, the accumulated result pages, the loading flag,
//! and the terminal failure state. Everything else renders what lives here.

mod search_state;

pub use search_state::{ResultSet, SearchState};
