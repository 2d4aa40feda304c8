use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use throbber_widgets_tui::Throbber;

use crate::app::App;
use crate::theme;

/// Height of the paging bar between the story list and the search field.
pub const LOADMORE_BAR_HEIGHT: u16 = 1;

pub fn render_bar(app: &mut App, frame: &mut Frame, area: Rect) {
    if app.search.is_loading {
        // Page numbers are 0-indexed internally, 1-based on screen.
        let label = if app.search.pending_page() == 0 {
            "Searching…".to_string()
        } else {
            format!(
                "Fetching page {}…",
                app.search.pending_page().saturating_add(1)
            )
        };

        let spinner = Throbber::default()
            .style(Style::default().fg(theme::loadmore::LABEL))
            .throbber_style(Style::default().fg(theme::loadmore::SPINNER));

        let mut line = Line::default();
        line.spans.push(Span::raw(" "));
        line.spans.push(spinner.to_symbol_span(&mut app.throbber));
        line.spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(theme::loadmore::LABEL),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    // The hint only makes sense once there is something to page past.
    if app.search.results.is_some() {
        let hint = Line::from(vec![
            Span::raw(" "),
            Span::styled("Ctrl+N", Style::default().fg(theme::loadmore::HINT_KEY)),
            Span::styled(
                " load more stories",
                Style::default().fg(theme::loadmore::HINT_TEXT),
            ),
        ]);
        frame.render_widget(Paragraph::new(hint), area);
    }
}

#[cfg(test)]
#[path = "loadmore_render_tests.rs"]
mod loadmore_render_tests;
