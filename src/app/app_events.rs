use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};
use crate::input;
use crate::results;

/// Short poll timeout keeps the spinner animating while a fetch is in flight.
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.notice = None;

        // The failure view only offers a way out.
        if self.search.error.is_some() {
            if is_quit_key(key) {
                self.should_quit = true;
            }
            return;
        }

        if handle_global_key(self, key) {
            return;
        }

        match self.focus {
            Focus::Input => input::input_events::handle_input_key(self, key),
            Focus::Results => results::results_events::handle_results_key(self, key),
        }
    }

    fn handle_paste_event(&mut self, text: String) {
        if self.focus != Focus::Input {
            return;
        }

        // The field is a single line; pasted line breaks become spaces.
        let flattened = text.replace(['\n', '\r'], " ");
        self.input.textarea.insert_str(&flattened);
        self.search.set_query(self.input.text());
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Results,
            Focus::Results => Focus::Input,
        };

        // Landing in the list selects the first row so j/k/d act on something visible.
        if self.focus == Focus::Results
            && self.results_cursor.selected().is_none()
            && self.search.result_count() > 0
        {
            self.results_cursor.select_next(self.search.result_count());
        }
    }
}

fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.should_quit = true;
            true
        }
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search.load_next_page();
            true
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            true
        }
        _ => false,
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
