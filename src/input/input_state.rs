use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::theme;

/// Single-line search field backed by a textarea widget.
///
/// The widget always holds exactly one line: Enter never reaches it and
/// pasted newlines are flattened before insertion.
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new(initial_query: &str) -> Self {
        Self {
            textarea: create_input_textarea(initial_query),
        }
    }

    /// Current contents of the field.
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new("")
    }
}

/// Creates a TextArea configured for query input.
fn create_input_textarea(initial_query: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![initial_query.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::input::CURSOR);
    textarea.move_cursor(CursorMove::End);
    textarea
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
