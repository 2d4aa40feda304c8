use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

/// Keys for the search field. Enter submits the current text; everything
/// else edits the textarea and syncs the controller's query.
pub fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.search.submit_query(),
        _ => {
            if app.input.textarea.input(key) {
                app.search.set_query(app.input.text());
            }
        }
    }
}

#[cfg(test)]
#[path = "input_events_tests.rs"]
mod input_events_tests;
