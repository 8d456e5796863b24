use std::collections::HashMap;

use crate::{Item, Record, SelectionProjection};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    item: Item,
    /// False only for items created by selecting a name that no page has delivered yet.
    cataloged: bool,
}

/// Cumulative registry of every item seen so far, keyed by name, plus the
/// first-seen catalog order.
///
/// Catalog positions are append-only: a name keeps its slot forever, even
/// after it is deselected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemStore {
    entries: HashMap<String, Entry>,
    catalog: Vec<String>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one fetched page and return the names newly appended to the catalog.
    ///
    /// The `selected` flag of every incoming record is recomputed from
    /// `selection`, so a toggle that happened while the page was in flight
    /// wins over whatever the store held before.
    pub fn merge_page(&mut self, records: &[Record], selection: &SelectionProjection) -> Vec<String> {
        let mut appended = Vec::new();
        for record in records {
            let selected = selection.contains(&record.name);
            let item = Item {
                name: record.name.clone(),
                url: record.url.clone(),
                selected,
            };
            match self.entries.get_mut(&record.name) {
                Some(entry) => {
                    entry.item = item;
                    if !entry.cataloged {
                        entry.cataloged = true;
                        self.catalog.push(record.name.clone());
                        appended.push(record.name.clone());
                    }
                }
                None => {
                    self.entries.insert(
                        record.name.clone(),
                        Entry {
                            item,
                            cataloged: true,
                        },
                    );
                    self.catalog.push(record.name.clone());
                    appended.push(record.name.clone());
                }
            }
        }
        appended
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.entries.get(name).map(|entry| &entry.item)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.get(name).is_some_and(|item| item.selected)
    }

    /// Returns false when the name is unknown.
    pub(crate) fn set_selected(&mut self, name: &str, selected: bool) -> bool {
        match self.entries.get_mut(name) {
            Some(entry) => {
                entry.item.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Register an item that no page has delivered. It stays out of the
    /// catalog until a merge brings the same name in.
    pub(crate) fn insert_uncataloged(&mut self, item: Item) {
        self.entries.entry(item.name.clone()).or_insert(Entry {
            item,
            cataloged: false,
        });
    }

    /// Names in first-seen order.
    pub fn catalog_names(&self) -> &[String] {
        &self.catalog
    }

    /// Items in catalog order.
    pub fn catalog(&self) -> impl Iterator<Item = &Item> + '_ {
        self.catalog
            .iter()
            .filter_map(|name| self.entries.get(name).map(|entry| &entry.item))
    }

    /// Number of cataloged items.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Names of all items flagged selected, in no particular order.
    pub fn selected_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .values()
            .filter(|entry| entry.item.selected)
            .map(|entry| entry.item.name.as_str())
    }
}
