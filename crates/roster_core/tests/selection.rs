mod common;

use common::*;
use roster_core::{Record, SelectionChange, SelectionController, UnknownItemPolicy};

fn loaded_controller(policy: UnknownItemPolicy, names: &[&str]) -> SelectionController {
    let mut controller = SelectionController::new(policy);
    let records: Vec<Record> = names.iter().map(|name| record(name)).collect();
    controller.merge_page(&records);
    controller
}

#[test]
fn unknown_name_is_rejected_by_default() {
    init_logging();
    let mut controller = loaded_controller(UnknownItemPolicy::default(), &["a"]);

    assert!(!controller.select("ghost"));
    assert_eq!(controller.toggle("ghost"), SelectionChange::Unchanged);
    assert!(controller.selection().is_empty());
    assert!(!controller.store().contains("ghost"));
}

#[test]
fn unknown_name_is_synthesized_when_allowed() {
    init_logging();
    let mut controller = loaded_controller(UnknownItemPolicy::Synthesize, &["a"]);

    assert_eq!(controller.toggle("ghost"), SelectionChange::Selected);
    let entry = controller.selection().get("ghost").unwrap();
    assert_eq!(entry.url, "");
    assert!(controller.store().is_selected("ghost"));
    // Not part of the catalog until a page delivers it.
    assert_eq!(controller.store().catalog_names(), ["a"]);
}

#[test]
fn synthesized_item_is_cataloged_and_reconciled_when_fetched() {
    init_logging();
    let mut controller = loaded_controller(UnknownItemPolicy::Synthesize, &["a"]);
    controller.select("ghost");
    controller.select("a");

    let appended = controller.merge_page(&[record("ghost"), record("b")]);

    assert_eq!(appended, vec!["ghost".to_string(), "b".to_string()]);
    assert_eq!(controller.store().catalog_names(), ["a", "ghost", "b"]);
    assert!(controller.store().is_selected("ghost"));
    let selected: Vec<_> = controller
        .selection()
        .iter()
        .map(|r| (r.name.as_str(), r.url.as_str()))
        .collect();
    assert_eq!(
        selected,
        vec![
            ("ghost", "https://api.example/ghost"),
            ("a", "https://api.example/a"),
        ]
    );
}

#[test]
fn deselect_removes_single_entry_and_keeps_order() {
    init_logging();
    let mut controller = loaded_controller(UnknownItemPolicy::Reject, &["a", "b", "c", "d"]);
    for name in ["d", "b", "a", "c"] {
        assert!(controller.select(name));
    }

    assert!(controller.deselect("b"));
    assert!(!controller.deselect("b"));

    let names: Vec<_> = controller.selection().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["d", "a", "c"]);
    assert!(!controller.store().is_selected("b"));
    assert_eq!(controller.store().len(), 4);
}

#[test]
fn merge_of_same_page_twice_is_idempotent() {
    init_logging();
    let mut controller = loaded_controller(UnknownItemPolicy::Reject, &["a", "b"]);
    controller.select("b");

    let appended = controller.merge_page(&[record("a"), record("b")]);

    assert!(appended.is_empty());
    assert_eq!(controller.store().catalog_names(), ["a", "b"]);
    assert!(!controller.store().is_selected("a"));
    assert!(controller.store().is_selected("b"));
    assert_eq!(controller.selection().len(), 1);
}

#[test]
fn refetch_with_new_url_updates_both_lists() {
    init_logging();
    let mut controller = loaded_controller(UnknownItemPolicy::Reject, &["a"]);
    controller.select("a");

    controller.merge_page(&[Record::new("a", "https://mirror.example/a")]);

    assert_eq!(controller.store().get("a").unwrap().url, "https://mirror.example/a");
    assert_eq!(
        controller.selection().get("a").unwrap().url,
        "https://mirror.example/a"
    );
}
