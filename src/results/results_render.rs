use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::api::types::Story;
use crate::app::{App, Focus};
use crate::theme;

pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::Results {
        theme::results::BORDER_FOCUSED
    } else {
        theme::results::BORDER_UNFOCUSED
    };

    let title = match &app.search.results {
        Some(results) => format!(" Stories ({}) ", results.items.len()),
        None => " Stories ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(
            title,
            Style::default().fg(theme::results::TITLE),
        )))
        .border_style(Style::default().fg(border_color));

    match &app.search.results {
        None => {
            let placeholder = Paragraph::new("Type a query and press Enter to search.")
                .style(Style::default().fg(theme::results::PLACEHOLDER))
                .block(block);
            frame.render_widget(placeholder, area);
        }
        Some(results) if results.items.is_empty() => {
            let placeholder = Paragraph::new("No stories matched.")
                .style(Style::default().fg(theme::results::PLACEHOLDER))
                .block(block);
            frame.render_widget(placeholder, area);
        }
        Some(results) => {
            let rows: Vec<ListItem<'static>> = results.items.iter().map(story_row).collect();
            let list = List::new(rows)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(theme::results::SELECTED_BG)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("► ");
            frame.render_stateful_widget(list, area, app.results_cursor.list_state_mut());
        }
    }
}

/// Two display lines per story: the title, then a dim meta line.
fn story_row(story: &Story) -> ListItem<'static> {
    let title = if story.title.is_empty() {
        "(untitled)".to_string()
    } else {
        story.title.clone()
    };

    let mut meta = format!(
        "{} points • by {} • {} comments",
        story.points, story.author, story.comment_count
    );
    if let Some(host) = domain(&story.url) {
        meta.push_str(" • ");
        meta.push_str(host);
    }

    ListItem::new(vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(theme::results::STORY_TITLE),
        )),
        Line::from(Span::styled(
            format!("  {meta}"),
            Style::default().fg(theme::results::STORY_META),
        )),
    ])
}

/// Host part of a story URL for the meta line. Ask HN posts have no URL.
fn domain(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let host = rest.split(['/', '?', '#']).next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() { None } else { Some(host) }
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
