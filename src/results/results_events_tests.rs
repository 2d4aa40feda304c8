//! Tests for results_events

use std::sync::mpsc::{Receiver, Sender};

use crossterm::event::KeyCode;

use crate::api::types::{ApiRequest, ApiResponse, Story};
use crate::app::{App, Focus};
use crate::search::ResultSet;
use crate::test_utils::test_helpers::{key, search_page, wired_app};

/// App with one loaded page of the given story ids, focused on the list.
fn app_with_results(ids: &[&str]) -> (App, Receiver<ApiRequest>, Sender<ApiResponse>) {
    let (mut app, request_rx, response_tx) = wired_app("rust");
    app.search.submit_query();
    request_rx.try_recv().expect("submission should be sent");
    response_tx
        .send(ApiResponse::Loaded {
            page: search_page(0, ids),
            request_id: 1,
        })
        .expect("send should succeed");
    app.poll_search();
    app.focus = Focus::Results;
    (app, request_rx, response_tx)
}

fn listed_ids(app: &App) -> Vec<String> {
    app.search
        .results
        .as_ref()
        .map_or_else(Vec::new, |results| {
            results.items.iter().map(|story| story.id.clone()).collect()
        })
}

#[test]
fn j_and_k_move_the_selection() {
    let (mut app, _request_rx, _response_tx) = app_with_results(&["a", "b", "c"]);

    app.handle_key_event(key(KeyCode::Char('j')));
    assert_eq!(app.results_cursor.selected(), Some(0));

    app.handle_key_event(key(KeyCode::Char('j')));
    assert_eq!(app.results_cursor.selected(), Some(1));

    app.handle_key_event(key(KeyCode::Char('k')));
    assert_eq!(app.results_cursor.selected(), Some(0));
}

#[test]
fn arrow_keys_move_the_selection() {
    let (mut app, _request_rx, _response_tx) = app_with_results(&["a", "b"]);

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.results_cursor.selected(), Some(1));

    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.results_cursor.selected(), Some(0));
}

#[test]
fn selection_stops_at_the_bounds() {
    let (mut app, _request_rx, _response_tx) = app_with_results(&["a", "b"]);

    for _ in 0..5 {
        app.handle_key_event(key(KeyCode::Char('j')));
    }
    assert_eq!(app.results_cursor.selected(), Some(1));

    for _ in 0..5 {
        app.handle_key_event(key(KeyCode::Char('k')));
    }
    assert_eq!(app.results_cursor.selected(), Some(0));
}

#[test]
fn d_dismisses_the_story_under_the_cursor() {
    let (mut app, _request_rx, _response_tx) = app_with_results(&["a", "b", "c"]);

    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Char('d')));

    assert_eq!(listed_ids(&app), ["b", "c"]);
    assert_eq!(app.results_cursor.selected(), Some(0));
}

#[test]
fn delete_key_also_dismisses() {
    let (mut app, _request_rx, _response_tx) = app_with_results(&["a", "b"]);

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Delete));

    assert_eq!(listed_ids(&app), ["b"]);
}

#[test]
fn dismissing_the_last_row_pulls_the_selection_back() {
    let (mut app, _request_rx, _response_tx) = app_with_results(&["a", "b", "c"]);

    for _ in 0..3 {
        app.handle_key_event(key(KeyCode::Char('j')));
    }
    assert_eq!(app.results_cursor.selected(), Some(2));

    app.handle_key_event(key(KeyCode::Char('d')));

    assert_eq!(listed_ids(&app), ["a", "b"]);
    assert_eq!(app.results_cursor.selected(), Some(1));
}

#[test]
fn d_without_a_selection_is_a_noop() {
    let (mut app, _request_rx, _response_tx) = app_with_results(&["a", "b"]);

    app.handle_key_event(key(KeyCode::Char('d')));

    assert_eq!(listed_ids(&app), ["a", "b"]);
}

#[test]
fn opening_a_story_without_a_url_is_a_noop() {
    let (mut app, _request_rx, _response_tx) = app_with_results(&["a"]);
    app.search.results = Some(ResultSet {
        items: vec![Story {
            id: "a".to_string(),
            title: "Ask HN: something".to_string(),
            url: String::new(),
            author: "pg".to_string(),
            comment_count: 12,
            points: 80,
        }],
        page: 0,
    });

    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.notice.is_none());
}

#[test]
fn q_quits_from_the_list() {
    let (mut app, _request_rx, _response_tx) = app_with_results(&["a"]);

    app.handle_key_event(key(KeyCode::Char('q')));

    assert!(app.should_quit());
}

#[test]
fn esc_returns_focus_to_the_search_field() {
    let (mut app, _request_rx, _response_tx) = app_with_results(&["a"]);

    app.handle_key_event(key(KeyCode::Esc));

    assert_eq!(app.focus, Focus::Input);
}
