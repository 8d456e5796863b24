mod common;

use common::*;
use roster_core::{update, Cursor, FetchFailure, GateState, Msg, ScrollGate, ScrollSample};

fn gate() -> ScrollGate {
    ScrollGate::new(Some(Cursor::new("p1")), MIN_HEIGHT)
}

#[test]
fn scroll_above_bottom_does_not_fetch() {
    init_logging();
    let mut gate = gate();
    let sample = ScrollSample {
        scroll_top: 100,
        ..bottom_sample()
    };
    assert_eq!(gate.on_scroll(sample), None);
    assert_eq!(gate.state(), GateState::Idle);
}

#[test]
fn short_content_does_not_fetch_even_at_bottom() {
    init_logging();
    let mut gate = gate();
    // Content shorter than the viewport: the container reports itself as scrolled to the end.
    let sample = ScrollSample {
        scroll_top: 0,
        client_height: MIN_HEIGHT,
        scroll_height: MIN_HEIGHT,
        content_height: 212,
    };
    assert!(sample.is_at_bottom());
    assert_eq!(gate.on_scroll(sample), None);
}

#[test]
fn content_exactly_at_threshold_may_fetch() {
    init_logging();
    let mut gate = gate();
    let sample = ScrollSample {
        scroll_top: 0,
        client_height: MIN_HEIGHT,
        scroll_height: MIN_HEIGHT,
        content_height: MIN_HEIGHT,
    };
    assert!(gate.on_scroll(sample).is_some());
}

#[test]
fn repeated_bottom_samples_fetch_once() {
    init_logging();
    let mut gate = gate();
    let first = gate.on_scroll(bottom_sample()).expect("first fetch");
    for _ in 0..10 {
        assert_eq!(gate.on_scroll(bottom_sample()), None);
        assert_eq!(gate.advance(), None);
    }
    assert_eq!(gate.in_flight(), Some(first.fetch_id));
    assert!(gate.is_loading());
}

#[test]
fn completion_without_cursor_is_terminal() {
    init_logging();
    let mut gate = gate();
    let request = gate.advance().unwrap();
    assert!(gate.complete(request.fetch_id, None));
    assert_eq!(gate.state(), GateState::Exhausted);
    assert_eq!(gate.cursor(), None);
    assert_eq!(gate.on_scroll(bottom_sample()), None);
    assert_eq!(gate.advance(), None);
}

#[test]
fn failure_keeps_cursor_for_retry() {
    init_logging();
    let mut gate = gate();
    let request = gate.advance().unwrap();
    assert!(gate.fail(request.fetch_id, FetchFailure::new("bad json")));
    assert_eq!(gate.state(), GateState::Errored);
    assert!(gate.is_errored());

    let retry = gate.on_scroll(bottom_sample()).unwrap();
    assert_eq!(retry.cursor, request.cursor);
    assert_eq!(gate.state(), GateState::Fetching);
    assert!(gate.is_errored());

    assert!(gate.complete(retry.fetch_id, Some(Cursor::new("p2"))));
    assert!(!gate.is_errored());
    assert_eq!(gate.state(), GateState::Idle);
}

#[test]
fn completions_outside_a_fetch_are_rejected() {
    init_logging();
    let mut gate = gate();
    assert!(!gate.complete(1, Some(Cursor::new("p2"))));
    assert!(!gate.fail(1, FetchFailure::new("late")));
    assert_eq!(gate.state(), GateState::Idle);
    assert_eq!(gate.cursor().map(Cursor::as_str), Some("p1"));
}

#[test]
fn load_more_ignores_geometry() {
    init_logging();
    let state = started_with(page(&["a"], Some("p2")));
    // Content far too short to scroll.
    let (state, effects) = update(state, Msg::Scrolled(ScrollSample::default()));
    assert!(effects.is_empty());
    let (_state, effects) = update(state, Msg::LoadMoreRequested);
    assert_eq!(fetch_ids(&effects).len(), 1);
}
