//! Remote-service entities: households, shopping lists, and their items.

use serde::{Deserialize, Serialize};

/// Identifier of a household, the top-level grouping of shopping lists.
pub type HouseholdId = i64;

/// Identifier of a shopping list.
pub type ListId = i64;

/// Identifier of a shopping-list item.
pub type ItemId = i64;

/// A household on the remote server. Selected once at setup and immutable
/// for the life of a sync instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    pub id: HouseholdId,
    pub name: String,
}

/// A shopping list belonging to exactly one household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: ListId,
    pub name: String,
}

/// A shopping-list item as returned by the remote service.
///
/// List membership is re-derived on every refresh cycle, never tracked
/// incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit ordering rank assigned by the server, if any.
    #[serde(default)]
    pub ordering: Option<i64>,
}

impl ShoppingItem {
    /// Sort key for list views: the explicit rank when present, the id
    /// otherwise. Unranked items therefore sort by id among themselves.
    #[must_use]
    pub fn sort_key(&self) -> i64 {
        self.ordering.unwrap_or(self.id)
    }
}
