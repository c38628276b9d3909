//! # larder-sync
//!
//! Refresh coordinator and task-list views for Larder.
//!
//! The [`Coordinator`] polls the remote service and publishes one immutable
//! [`larder_core::Snapshot`] per refresh cycle; overlapping refresh requests
//! collapse into a single in-flight fetch. A [`TaskList`] is a read-only
//! projection over one list of that snapshot whose mutations call the remote
//! service and then force a refresh.
//!
//! Data flows one direction per cycle: coordinator, snapshot, view, render.
//! Mutations flow view, remote write, forced refresh, new snapshot.

mod coordinator;
mod error;
mod list_view;
pub mod setup;

#[cfg(test)]
mod test_support;

pub use coordinator::{Coordinator, refresh_ticker};
pub use error::SyncError;
pub use list_view::TaskList;
