use crate::view_model::{AppViewModel, CatalogRowView, SelectionRowView};
use crate::{Cursor, ScrollGate, SelectionController, UnknownItemPolicy};

/// Host-supplied settings for one browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// First page to request. `None` starts the session exhausted.
    pub initial_cursor: Option<Cursor>,
    /// Content must be at least this tall before scrolling may trigger a fetch.
    pub min_content_height: u32,
    pub unknown_item_policy: UnknownItemPolicy,
}

/// All state of one browsing session. Created when the session opens and
/// dropped when it closes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    controller: SelectionController,
    gate: ScrollGate,
    total_count: Option<u64>,
    started: bool,
    dirty: bool,
}

impl AppState {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            controller: SelectionController::new(config.unknown_item_policy),
            gate: ScrollGate::new(config.initial_cursor, config.min_content_height),
            ..Self::default()
        }
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn gate(&self) -> &ScrollGate {
        &self.gate
    }

    pub fn view(&self) -> AppViewModel {
        let catalog = self
            .controller
            .store()
            .catalog()
            .map(|item| CatalogRowView {
                name: item.name.clone(),
                url: item.url.clone(),
                selected: item.selected,
            })
            .collect();
        let selection = self
            .controller
            .selection()
            .iter()
            .map(|record| SelectionRowView {
                name: record.name.clone(),
                url: record.url.clone(),
            })
            .collect();
        AppViewModel {
            catalog,
            selection,
            loading: self.gate.is_loading(),
            errored: self.gate.is_errored(),
            exhausted: self.gate.is_exhausted(),
            error_message: self.gate.last_failure().map(ToString::to_string),
            total_count: self.total_count,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn controller_mut(&mut self) -> &mut SelectionController {
        &mut self.controller
    }

    pub(crate) fn gate_mut(&mut self) -> &mut ScrollGate {
        &mut self.gate
    }

    pub(crate) fn set_total_count(&mut self, count: Option<u64>) {
        if count.is_some() {
            self.total_count = count;
        }
    }

    /// Returns true only the first time.
    pub(crate) fn mark_started(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }
}
