//! # larder-core
//!
//! Core types for the Larder workspace.
//!
//! This crate provides the domain objects shared across all Larder crates:
//! - Remote-service entities (households, shopping lists, items)
//! - The derived task-view types rendered to consumers
//! - The consolidated per-cycle [`Snapshot`]

pub mod item;
pub mod snapshot;
pub mod task;

pub use item::{Household, HouseholdId, ItemId, ListId, ShoppingItem, ShoppingList};
pub use snapshot::{ListData, Snapshot};
pub use task::{TaskDraft, TaskItem, TaskStatus};
