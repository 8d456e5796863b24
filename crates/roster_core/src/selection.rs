use std::collections::{BTreeMap, HashMap};

use roster_logging::roster_debug;

use crate::{Item, ItemStore, Record};

/// What to do when asked to select a name that no page has delivered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownItemPolicy {
    /// Ignore the request.
    #[default]
    Reject,
    /// Create an uncataloged item with an empty url and select it.
    Synthesize,
}

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected,
    Deselected,
    Unchanged,
}

/// Selected items in selection order.
///
/// Entries are keyed by a monotonically increasing sequence number, with a
/// name index on the side, so insert and remove never scan the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionProjection {
    entries: BTreeMap<u64, Record>,
    positions: HashMap<String, u64>,
    next_seq: u64,
}

impl SelectionProjection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.entries.values()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.positions
            .get(name)
            .and_then(|seq| self.entries.get(seq))
    }

    /// Append at the end. Returns false if the name is already present.
    fn push(&mut self, record: Record) -> bool {
        if self.positions.contains_key(&record.name) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.positions.insert(record.name.clone(), seq);
        self.entries.insert(seq, record);
        true
    }

    fn remove(&mut self, name: &str) -> Option<Record> {
        let seq = self.positions.remove(name)?;
        self.entries.remove(&seq)
    }

    /// Replace the url of a selected entry in place, keeping its position.
    fn refresh_url(&mut self, name: &str, url: &str) -> bool {
        let Some(seq) = self.positions.get(name) else {
            return false;
        };
        match self.entries.get_mut(seq) {
            Some(record) if record.url != url => {
                record.url = url.to_string();
                true
            }
            _ => false,
        }
    }
}

/// Owns the item store and the selection list and keeps them in agreement:
/// a name is in the selection list exactly when its stored item is flagged
/// selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionController {
    store: ItemStore,
    selection: SelectionProjection,
    policy: UnknownItemPolicy,
}

impl SelectionController {
    pub fn new(policy: UnknownItemPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionProjection {
        &self.selection
    }

    pub fn policy(&self) -> UnknownItemPolicy {
        self.policy
    }

    /// Returns true if the selection changed.
    pub fn select(&mut self, name: &str) -> bool {
        if self.selection.contains(name) {
            return false;
        }
        let url = match self.store.get(name) {
            Some(item) if item.selected => return false,
            Some(item) => item.url.clone(),
            None => match self.policy {
                UnknownItemPolicy::Reject => {
                    roster_debug!("select ignored for unknown item {name}");
                    return false;
                }
                UnknownItemPolicy::Synthesize => {
                    roster_debug!("synthesizing uncataloged item {name}");
                    self.store.insert_uncataloged(Item {
                        name: name.to_string(),
                        url: String::new(),
                        selected: false,
                    });
                    String::new()
                }
            },
        };
        self.store.set_selected(name, true);
        self.selection.push(Record::new(name, url));
        roster_debug!("selected {name} ({} selected)", self.selection.len());
        true
    }

    /// Returns true if the selection changed.
    pub fn deselect(&mut self, name: &str) -> bool {
        if self.selection.remove(name).is_none() {
            return false;
        }
        self.store.set_selected(name, false);
        roster_debug!("deselected {name} ({} selected)", self.selection.len());
        true
    }

    /// Select or deselect depending on the stored flag.
    pub fn toggle(&mut self, name: &str) -> SelectionChange {
        if self.store.is_selected(name) {
            if self.deselect(name) {
                return SelectionChange::Deselected;
            }
        } else if self.select(name) {
            return SelectionChange::Selected;
        }
        SelectionChange::Unchanged
    }

    /// Merge a fetched page into the store and return newly cataloged names.
    ///
    /// Selected entries whose url changed with this page are updated in place
    /// so both lists show the same detail reference.
    pub fn merge_page(&mut self, records: &[Record]) -> Vec<String> {
        let appended = self.store.merge_page(records, &self.selection);
        for record in records {
            if self.selection.refresh_url(&record.name, &record.url) {
                roster_debug!("selection url refreshed for {}", record.name);
            }
        }
        appended
    }
}
