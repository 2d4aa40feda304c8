use proptest::prelude::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;
use crate::search::ResultSet;
use crate::test_utils::test_helpers::story;

/// Helper to render just the story pane to a string
fn render_pane_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal should build");
    terminal
        .draw(|frame| render_pane(app, frame, frame.area()))
        .expect("draw should succeed");
    terminal.backend().to_string()
}

fn app_with_rows(ids: &[&str]) -> App {
    let mut app = App::new("rust");
    app.search.results = Some(ResultSet {
        items: ids.iter().map(|id| story(id)).collect(),
        page: 0,
    });
    app
}

#[test]
fn placeholder_is_shown_before_the_first_search() {
    let mut app = App::new("");
    let rendered = render_pane_to_string(&mut app, 60, 10);

    assert!(rendered.contains("Type a query and press Enter to search."));
    assert!(rendered.contains(" Stories "));
}

#[test]
fn empty_results_show_the_no_match_message() {
    let mut app = app_with_rows(&[]);
    let rendered = render_pane_to_string(&mut app, 60, 10);

    assert!(rendered.contains("No stories matched."));
    assert!(rendered.contains(" Stories (0) "));
}

#[test]
fn rows_show_title_and_meta_line() {
    let mut app = app_with_rows(&["a"]);
    let rendered = render_pane_to_string(&mut app, 70, 10);

    assert!(rendered.contains("Story a"));
    assert!(rendered.contains("42 points • by pg • 3 comments • example.com"));
}

#[test]
fn title_counts_the_visible_rows() {
    let mut app = app_with_rows(&["a", "b", "c"]);
    let rendered = render_pane_to_string(&mut app, 60, 12);

    assert!(rendered.contains(" Stories (3) "));
}

#[test]
fn untitled_stories_get_a_fallback_title() {
    let mut app = App::new("");
    let mut nameless = story("a");
    nameless.title = String::new();
    app.search.results = Some(ResultSet {
        items: vec![nameless],
        page: 0,
    });

    let rendered = render_pane_to_string(&mut app, 60, 10);
    assert!(rendered.contains("(untitled)"));
}

#[test]
fn selected_row_shows_the_marker() {
    let mut app = app_with_rows(&["a", "b"]);
    app.results_cursor.select_next(2);

    let rendered = render_pane_to_string(&mut app, 60, 10);
    assert!(rendered.contains("► Story a"));
}

#[test]
fn unselected_list_has_no_marker() {
    let mut app = app_with_rows(&["a", "b"]);

    let rendered = render_pane_to_string(&mut app, 60, 10);
    assert!(!rendered.contains('►'));
}

#[test]
fn domain_strips_scheme_and_path() {
    assert_eq!(
        domain("https://blog.rust-lang.org/2024/07/25/release.html"),
        Some("blog.rust-lang.org")
    );
    assert_eq!(domain("http://example.com?page=2"), Some("example.com"));
    assert_eq!(domain("https://news.ycombinator.com#up"), Some("news.ycombinator.com"));
}

#[test]
fn domain_strips_www_prefix() {
    assert_eq!(domain("https://www.theguardian.com/article"), Some("theguardian.com"));
}

#[test]
fn domain_rejects_urls_without_a_scheme() {
    assert_eq!(domain("item?id=123"), None);
    assert_eq!(domain(""), None);
    assert_eq!(domain("https://"), None);
}

mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The pane renders at any reasonable size without panicking and
        /// always shows its title.
        #[test]
        fn prop_pane_renders_at_any_size(
            width in 30u16..120u16,
            height in 4u16..40u16,
        ) {
            let mut app = app_with_rows(&["a", "b", "c"]);
            let rendered = render_pane_to_string(&mut app, width, height);
            prop_assert!(rendered.contains("Stories"));
        }

        /// Selection never breaks rendering no matter where the cursor sits.
        #[test]
        fn prop_any_selection_renders(moves in 0usize..8) {
            let mut app = app_with_rows(&["a", "b", "c"]);
            for _ in 0..moves {
                app.results_cursor.select_next(3);
            }
            let rendered = render_pane_to_string(&mut app, 60, 12);
            prop_assert!(rendered.contains("Story a"));
        }
    }
}
