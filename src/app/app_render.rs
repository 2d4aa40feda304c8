use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::App;
use crate::help::help_line_render::{self, HELP_LINE_HEIGHT};
use crate::input::input_render::{self, INPUT_HEIGHT};
use crate::loadmore::loadmore_render::{self, LOADMORE_BAR_HEIGHT};
use crate::results::results_render;
use crate::theme;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        if let Some(message) = &self.search.error {
            render_failure(message, frame);
            return;
        }

        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(LOADMORE_BAR_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(HELP_LINE_HEIGHT),
        ])
        .split(frame.area());

        results_render::render_pane(self, frame, layout[0]);
        loadmore_render::render_bar(self, frame, layout[1]);
        input_render::render_field(self, frame, layout[2]);
        help_line_render::render_line(self, frame, layout[3]);
    }
}

/// Full-screen replacement for the normal layout once a fetch has failed.
fn render_failure(message: &str, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::failure::BORDER))
        .title(" Error ");
    let inner_area = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let lines = vec![
        Line::from(""),
        Line::styled(
            "Something went wrong.",
            Style::default()
                .fg(theme::failure::HEADLINE)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            message.to_string(),
            Style::default().fg(theme::failure::DETAIL),
        ),
        Line::from(""),
        Line::styled(
            "Press q to quit.",
            Style::default().fg(theme::failure::HINT),
        ),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
