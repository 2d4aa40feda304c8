use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Focus};

pub fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.results_cursor.select_previous(app.search.result_count());
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.results_cursor.select_next(app.search.result_count());
        }

        KeyCode::Char('d') | KeyCode::Delete => {
            dismiss_selected(app);
        }

        KeyCode::Enter | KeyCode::Char('o') => {
            open_selected(app);
        }

        KeyCode::Esc => {
            app.focus = Focus::Input;
        }

        KeyCode::Char('q') => {
            app.should_quit = true;
        }

        _ => {}
    }
}

/// Removes the story under the cursor from the list.
fn dismiss_selected(app: &mut App) {
    let Some(selected) = app.results_cursor.selected() else {
        return;
    };
    let Some(id) = app.search.story_at(selected).map(|story| story.id.clone()) else {
        return;
    };

    app.search.dismiss(&id);
    app.results_cursor.clamp(app.search.result_count());
}

/// Opens the selected story's link in the default browser. Stories without
/// a URL (Ask HN posts) are ignored.
fn open_selected(app: &mut App) {
    let Some(selected) = app.results_cursor.selected() else {
        return;
    };
    let Some(story) = app.search.story_at(selected) else {
        return;
    };
    if story.url.is_empty() {
        return;
    }

    if let Err(e) = opener::open(&story.url) {
        log::debug!("results: failed to open {}: {e}", story.url);
        app.notice = Some(format!("Failed to open link: {e}"));
    }
}

#[cfg(test)]
#[path = "results_events_tests.rs"]
mod results_events_tests;
