use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme;

/// Height of the hint line at the bottom of the screen.
pub const HELP_LINE_HEIGHT: u16 = 1;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.focus == Focus::Results {
        hints!["j/k" => "Select", "d" => "Dismiss", "Enter" => "Open", "Ctrl+N" => "More", "Tab" => "Search", "q" => "Quit"]
    } else {
        hints!["Enter" => "Search", "Tab" => "Stories", "Ctrl+N" => "More", "Ctrl+C" => "Quit"]
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    // A pending notice (config problems, failed link opens) takes the line
    // over until the next key press.
    if let Some(notice) = &app.notice {
        let warning = Paragraph::new(Line::from(Span::styled(
            format!(" {notice}"),
            Style::default().fg(theme::help_line::WARNING),
        )));
        frame.render_widget(warning, area);
        return;
    }

    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    let help = Paragraph::new(Line::from(spans));
    frame.render_widget(help, area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
