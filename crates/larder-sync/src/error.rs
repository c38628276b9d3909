//! Sync-layer error types.

use larder_client::ClientError;
use larder_core::ListId;
use thiserror::Error;

/// Errors surfaced by the coordinator, setup, and task-list views.
///
/// Cloneable so one refresh outcome can be handed to every caller that
/// attached to the same in-flight cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The credential was rejected. Not retried automatically; the caller
    /// must re-authenticate.
    #[error("authentication required: {0}")]
    AuthRequired(String),

    /// A transient failure aborted the refresh cycle. The previous snapshot
    /// is retained and the next scheduled cycle retries.
    #[error("refresh failed: {0}")]
    Refresh(String),

    /// A mutation failed remotely. Not retried; the next successful refresh
    /// reconciles the view with whatever the remote side applied.
    #[error("remote mutation failed: {0}")]
    Mutation(String),

    /// Caller error detected before any remote call was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The coordinator has no data for the requested list.
    #[error("unknown shopping list {0}")]
    UnknownList(ListId),
}

impl From<ClientError> for SyncError {
    /// Classification for fetch paths: auth failures surface as a
    /// re-authentication requirement, everything else as a transient
    /// refresh failure.
    fn from(error: ClientError) -> Self {
        if error.is_auth() {
            Self::AuthRequired(error.to_string())
        } else {
            Self::Refresh(error.to_string())
        }
    }
}

impl SyncError {
    /// Classification for mutation paths, where non-auth failures are
    /// mutation failures rather than refresh failures.
    #[must_use]
    pub fn mutation(error: ClientError) -> Self {
        if error.is_auth() {
            Self::AuthRequired(error.to_string())
        } else {
            Self::Mutation(error.to_string())
        }
    }
}
