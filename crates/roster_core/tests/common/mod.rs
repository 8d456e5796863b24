#![allow(dead_code)]

use std::sync::Once;

use roster_core::{
    update, AppState, Cursor, Effect, FetchFailure, FetchId, Msg, Page, Record, ScrollSample,
    SessionConfig, UnknownItemPolicy,
};

pub const MIN_HEIGHT: u32 = 576;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(roster_logging::initialize_for_tests);
}

pub fn config(policy: UnknownItemPolicy) -> SessionConfig {
    SessionConfig {
        initial_cursor: Some(Cursor::new("p1")),
        min_content_height: MIN_HEIGHT,
        unknown_item_policy: policy,
    }
}

pub fn record(name: &str) -> Record {
    Record::new(name, format!("https://api.example/{name}"))
}

pub fn page(names: &[&str], next: Option<&str>) -> Page {
    Page::new(names.iter().map(|name| record(name)).collect(), next.map(Cursor::new))
}

/// A sample that sits exactly at the bottom of tall content.
pub fn bottom_sample() -> ScrollSample {
    ScrollSample {
        scroll_top: 1000 - MIN_HEIGHT,
        client_height: MIN_HEIGHT,
        scroll_height: 1000,
        content_height: 1000,
    }
}

pub fn fetch_ids(effects: &[Effect]) -> Vec<FetchId> {
    effects
        .iter()
        .map(|effect| match effect {
            Effect::FetchPage { fetch_id, .. } => *fetch_id,
        })
        .collect()
}

pub fn single_fetch(effects: &[Effect]) -> (FetchId, Cursor) {
    match effects {
        [Effect::FetchPage { fetch_id, cursor }] => (*fetch_id, cursor.clone()),
        other => panic!("expected one fetch effect, got {other:?}"),
    }
}

/// Start a session and complete the initial fetch with `first`.
pub fn started_with(first: Page) -> AppState {
    let (state, effects) = update(
        AppState::new(config(UnknownItemPolicy::Reject)),
        Msg::SessionStarted,
    );
    let (fetch_id, _) = single_fetch(&effects);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            fetch_id,
            result: Ok(first),
        },
    );
    state
}

pub fn loaded(state: AppState, fetch_id: FetchId, page: Page) -> AppState {
    update(
        state,
        Msg::PageLoaded {
            fetch_id,
            result: Ok(page),
        },
    )
    .0
}

pub fn failed(state: AppState, fetch_id: FetchId) -> AppState {
    update(
        state,
        Msg::PageLoaded {
            fetch_id,
            result: Err(FetchFailure::new("connection reset")),
        },
    )
    .0
}

pub fn names_of_catalog(state: &AppState) -> Vec<String> {
    state.view().catalog.into_iter().map(|row| row.name).collect()
}

pub fn names_of_selection(state: &AppState) -> Vec<String> {
    state.view().selection.into_iter().map(|row| row.name).collect()
}
