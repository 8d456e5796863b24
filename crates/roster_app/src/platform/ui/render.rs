use std::ops::Range;

use roster_core::AppViewModel;

pub const EMPTY_CATALOG: &str = "Items will appear here";
pub const NETWORK_ERROR: &str = "Network error: could not load items";
pub const EMPTY_SELECTION: &str = "Selected items will appear here";
const LOADER_ROW: &str = "  ... loading more";

pub fn render_status(view: &AppViewModel) -> String {
    let state = if view.loading {
        "loading"
    } else if view.exhausted {
        "all loaded"
    } else {
        "idle"
    };
    let shown = match view.total_count {
        Some(total) => format!("{} of {}", view.catalog.len(), total),
        None => view.catalog.len().to_string(),
    };
    let mut status = format!(
        "[{state}] items: {shown} | selected: {}",
        view.selection.len()
    );
    if let Some(message) = view.error_message.as_deref() {
        status.push_str(" | error: ");
        status.push_str(message);
    }
    status
}

/// Catalog rows within `rows`, followed by the loader row when the range reaches the end.
pub fn render_catalog(view: &AppViewModel, rows: Range<usize>) -> Vec<String> {
    if view.catalog.is_empty() {
        let placeholder = if view.errored {
            NETWORK_ERROR
        } else {
            EMPTY_CATALOG
        };
        return vec![format!("  {placeholder}")];
    }

    let end = rows.end.min(view.catalog.len());
    let start = rows.start.min(end);
    let mut lines: Vec<String> = view.catalog[start..end]
        .iter()
        .map(|row| {
            let mark = if row.selected { "[x]" } else { "[ ]" };
            format!("{mark} {:<24} {}", row.name, row.url)
        })
        .collect();
    if end == view.catalog.len() && view.show_loader() {
        lines.push(LOADER_ROW.to_string());
    }
    lines
}

pub fn render_selection(view: &AppViewModel) -> Vec<String> {
    if view.selection.is_empty() {
        return vec![format!("  {EMPTY_SELECTION}")];
    }
    view.selection
        .iter()
        .map(|row| format!("(x) {:<24} {}", row.name, row.url))
        .collect()
}
