//! Tests for help_line_render

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;
use crate::app::App;

fn render_help_line_to_string(app: &App, width: u16) -> String {
    let backend = TestBackend::new(width, 1);
    let mut terminal = Terminal::new(backend).expect("test terminal should build");
    terminal
        .draw(|frame| render_line(app, frame, frame.area()))
        .expect("draw should succeed");
    terminal.backend().to_string()
}

#[test]
fn input_focus_shows_submit_and_quit_hints() {
    let app = App::new("");

    let output = render_help_line_to_string(&app, 120);

    assert!(output.contains("Enter Search"));
    assert!(output.contains("Ctrl+C Quit"));
    assert!(!output.contains("Dismiss"));
}

#[test]
fn results_focus_shows_list_hints() {
    let mut app = App::new("");
    app.focus = Focus::Results;

    let output = render_help_line_to_string(&app, 120);

    assert!(output.contains("j/k Select"));
    assert!(output.contains("d Dismiss"));
    assert!(output.contains("Enter Open"));
    assert!(output.contains("q Quit"));
}

#[test]
fn hints_are_separated_by_bullets() {
    let app = App::new("");

    let output = render_help_line_to_string(&app, 120);
    assert!(output.contains(" \u{2022} "));
}

#[test]
fn notice_replaces_the_hints() {
    let mut app = App::new("");
    app.notice = Some("Invalid config: expected a string".to_string());

    let output = render_help_line_to_string(&app, 120);

    assert!(output.contains("Invalid config: expected a string"));
    assert!(!output.contains("Ctrl+C Quit"));
}
