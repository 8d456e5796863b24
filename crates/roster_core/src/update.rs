use roster_logging::{roster_debug, roster_info};

use crate::{AppState, Effect, FetchRequest, Msg, SelectionChange};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => {
            if state.mark_started() {
                let request = state.gate_mut().advance();
                fetch_effects(&mut state, request)
            } else {
                Vec::new()
            }
        }
        Msg::Scrolled(sample) => {
            let request = state.gate_mut().on_scroll(sample);
            fetch_effects(&mut state, request)
        }
        Msg::LoadMoreRequested => {
            let request = state.gate_mut().advance();
            fetch_effects(&mut state, request)
        }
        Msg::PageLoaded { fetch_id, result } => {
            match result {
                Ok(page) => {
                    if state.gate_mut().complete(fetch_id, page.next_cursor.clone()) {
                        let appended = state.controller_mut().merge_page(&page.records);
                        state.set_total_count(page.total_count);
                        roster_info!(
                            "fetch {fetch_id} merged: {} new of {} records, catalog size {}",
                            appended.len(),
                            page.records.len(),
                            state.controller().store().len()
                        );
                        state.mark_dirty();
                    }
                }
                Err(failure) => {
                    if state.gate_mut().fail(fetch_id, failure) {
                        state.mark_dirty();
                    }
                }
            }
            Vec::new()
        }
        Msg::ItemToggled(name) => {
            let change = state.controller_mut().toggle(&name);
            if change != SelectionChange::Unchanged {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SelectionRemoved(name) => {
            if state.controller_mut().deselect(&name) {
                state.mark_dirty();
            } else {
                roster_debug!("remove ignored for {name}: not selected");
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn fetch_effects(state: &mut AppState, request: Option<FetchRequest>) -> Vec<Effect> {
    match request {
        Some(FetchRequest { fetch_id, cursor }) => {
            state.mark_dirty();
            vec![Effect::FetchPage { fetch_id, cursor }]
        }
        None => Vec::new(),
    }
}
