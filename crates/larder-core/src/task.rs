//! Derived task-view types.
//!
//! These are computed from a [`ShoppingItem`] plus the bucket (active vs
//! recently completed) it was found in. They are never persisted.

use serde::{Deserialize, Serialize};

use crate::item::{ItemId, ShoppingItem};

/// Completion state of a task.
///
/// Two states only; an item moves between them solely through explicit
/// status-change mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Active,
    Completed,
}

/// Read-side task item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: ItemId,
    pub summary: String,
    /// Normalized: an absent remote description becomes the empty string.
    pub description: String,
    pub status: TaskStatus,
}

impl TaskItem {
    /// Build the view item for `item` found in the bucket implied by `status`.
    #[must_use]
    pub fn from_item(item: &ShoppingItem, status: TaskStatus) -> Self {
        Self {
            id: item.id,
            summary: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            status,
        }
    }
}

/// Input to task creation.
///
/// Only active drafts with a non-empty summary are accepted; anything else
/// is rejected before a remote call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub summary: String,
    pub description: Option<String>,
    pub status: TaskStatus,
}
