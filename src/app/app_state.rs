use throbber_widgets_tui::ThrobberState;

use crate::config::ConfigResult;
use crate::input::InputState;
use crate::results::CursorState;
use crate::search::SearchState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Results,
}

pub struct App {
    pub input: InputState,
    pub search: SearchState,
    pub results_cursor: CursorState,
    pub focus: Focus,
    pub throbber: ThrobberState,
    /// One-line warning shown in the help line until the next key press
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(initial_query: &str) -> Self {
        Self {
            input: InputState::new(initial_query),
            search: SearchState::new(initial_query),
            results_cursor: CursorState::new(),
            focus: Focus::Input,
            throbber: ThrobberState::default(),
            notice: None,
            should_quit: false,
        }
    }

    /// Surfaces a config warning in the help line and submits a query
    /// seeded from the command line or config. Called once after the
    /// worker channels are wired, before the first frame.
    pub fn start(&mut self, config: &ConfigResult) {
        self.notice = config.warning.clone();
        if !self.search.query().is_empty() {
            self.search.submit_query();
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies pending worker responses and keeps the cursor inside the
    /// list. Called once per event-loop tick before drawing.
    pub fn poll_search(&mut self) {
        self.search.poll_responses();
        self.results_cursor.clamp(self.search.result_count());
        self.throbber.calc_next();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
