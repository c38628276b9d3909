//! Consolidated per-cycle view of one household's lists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::{ListId, ShoppingItem, ShoppingList};

/// One shopping list's slice of a [`Snapshot`]: list metadata plus the
/// active and recently-completed item buckets.
///
/// Invariant: at assembly time each item id appears in exactly one of the
/// two buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListData {
    pub list: ShoppingList,
    pub items: Vec<ShoppingItem>,
    pub recent_items: Vec<ShoppingItem>,
}

/// Complete view of all lists for one household, produced atomically once
/// per refresh cycle.
///
/// A snapshot is replaced wholesale on a successful cycle and left untouched
/// on a failed one; consumers never observe a half-updated mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    lists: BTreeMap<ListId, ListData>,
}

impl Snapshot {
    #[must_use]
    pub fn new(lists: BTreeMap<ListId, ListData>) -> Self {
        Self { lists }
    }

    #[must_use]
    pub fn get(&self, list: ListId) -> Option<&ListData> {
        self.lists.get(&list)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ListId, &ListData)> {
        self.lists.iter().map(|(id, data)| (*id, data))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
