//! hns library - Interactive Hacker News search
//!
//! This library exposes the core functionality of hns for testing purposes.

pub mod api;
pub mod app;
pub mod config;
pub mod help;
pub mod input;
pub mod loadmore;
pub mod results;
pub mod search;
pub mod theme;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
