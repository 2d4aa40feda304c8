use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};
use crate::theme;

/// Height of the search field including borders.
pub const INPUT_HEIGHT: u16 = 3;

pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Input;
    let border_color = if focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    let title = Line::from(Span::styled(
        " Search ",
        Style::default().fg(theme::input::TITLE),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // The cursor block only shows while the field has focus.
    let cursor_style = if focused {
        theme::input::CURSOR
    } else {
        theme::input::CURSOR_HIDDEN
    };
    app.input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&app.input.textarea, inner_area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
