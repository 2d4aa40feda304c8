//! Shared test utilities for hns
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::api::types::{ApiRequest, ApiResponse, SearchPage, Story};
    use crate::app::App;

    /// Helper to build a story with recognizable field values
    pub fn story(id: &str) -> Story {
        Story {
            id: id.to_string(),
            title: format!("Story {id}"),
            url: format!("https://example.com/{id}"),
            author: "pg".to_string(),
            comment_count: 3,
            points: 42,
        }
    }

    /// Helper to build one fetched page holding the given story ids
    pub fn search_page(page: u32, ids: &[&str]) -> SearchPage {
        SearchPage {
            hits: ids.iter().map(|id| story(id)).collect(),
            page,
        }
    }

    /// Helper to create an App wired to in-memory worker channels.
    /// Returns the worker-side channel ends so tests can inspect requests
    /// and inject responses.
    pub fn wired_app(initial_query: &str) -> (App, Receiver<ApiRequest>, Sender<ApiResponse>) {
        let mut app = App::new(initial_query);
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.search.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Helper to render the whole app into a plain string for assertions
    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal should build");
        terminal
            .draw(|frame| app.render(frame))
            .expect("draw should succeed");
        terminal.backend().to_string()
    }
}
