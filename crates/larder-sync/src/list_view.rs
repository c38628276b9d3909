//! Per-list task view over the coordinator snapshot.

use std::sync::Arc;

use futures::future::join_all;
use larder_core::{ItemId, ListId, ShoppingItem, TaskDraft, TaskItem, TaskStatus};
use tracing::{debug, warn};

use crate::coordinator::Coordinator;
use crate::error::SyncError;

/// Read-only projection of one shopping list plus its mutation operations.
///
/// Reads come from the coordinator's current snapshot. Every mutation calls
/// the remote service and then forces a refresh, so the view reflects
/// authoritative remote state rather than an optimistic local patch.
pub struct TaskList {
    coordinator: Arc<Coordinator>,
    list_id: ListId,
}

impl TaskList {
    #[must_use]
    pub fn new(coordinator: Arc<Coordinator>, list_id: ListId) -> Self {
        Self {
            coordinator,
            list_id,
        }
    }

    #[must_use]
    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    /// Display name from the current snapshot.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.coordinator
            .snapshot()?
            .get(self.list_id)
            .map(|data| data.list.name.clone())
    }

    /// Ordered task sequence: active items first, sorted by rank (id when
    /// unranked), then recently completed items in the same order.
    /// Incomplete work precedes history.
    ///
    /// Empty when the list id is absent from the snapshot.
    #[must_use]
    pub fn items(&self) -> Vec<TaskItem> {
        let Some(snapshot) = self.coordinator.snapshot() else {
            return Vec::new();
        };
        let Some(data) = snapshot.get(self.list_id) else {
            return Vec::new();
        };
        let mut tasks = Vec::with_capacity(data.items.len() + data.recent_items.len());
        tasks.extend(sorted_tasks(&data.items, TaskStatus::Active));
        tasks.extend(sorted_tasks(&data.recent_items, TaskStatus::Completed));
        tasks
    }

    /// Create a new active task, then force a refresh.
    ///
    /// # Errors
    ///
    /// [`SyncError::Validation`] if the draft is completed or has an empty
    /// summary; no remote call is made in that case. Otherwise propagates
    /// remote and refresh failures.
    pub async fn create(&self, draft: &TaskDraft) -> Result<(), SyncError> {
        if draft.status != TaskStatus::Active {
            return Err(SyncError::Validation(
                "only active tasks may be created".to_string(),
            ));
        }
        if draft.summary.trim().is_empty() {
            return Err(SyncError::Validation("summary must not be empty".to_string()));
        }
        self.coordinator
            .api()
            .add_item(self.list_id, &draft.summary, draft.description.as_deref())
            .await
            .map_err(SyncError::mutation)?;
        self.coordinator.refresh().await?;
        Ok(())
    }

    /// Update an existing task, then force a refresh.
    ///
    /// Fires up to three independent remote calls in order: name update
    /// (summary changed and the incoming status is not completed),
    /// description update (changed; cleared descriptions are sent as an
    /// explicit empty string), status transition (completing removes the
    /// item from the list, un-completing re-adds it carrying summary and
    /// description). There is no transaction and no rollback: the first
    /// failing call propagates and earlier calls stay applied until the
    /// next successful refresh reconciles the view.
    ///
    /// A task id absent from the snapshot fires no remote call; the forced
    /// refresh still runs.
    ///
    /// # Errors
    ///
    /// [`SyncError::UnknownList`] when the list is not in the snapshot;
    /// otherwise remote and refresh failures.
    pub async fn update(&self, task: &TaskItem) -> Result<(), SyncError> {
        let current = self.current_task(task.id)?;

        if let Some(current) = current {
            let api = self.coordinator.api();
            if current.summary != task.summary && task.status != TaskStatus::Completed {
                api.update_item(task.id, &task.summary)
                    .await
                    .map_err(SyncError::mutation)?;
            }
            if current.description != task.description {
                api.update_item_description(self.list_id, task.id, &task.description)
                    .await
                    .map_err(SyncError::mutation)?;
            }
            if current.status != task.status {
                match task.status {
                    TaskStatus::Completed => {
                        api.remove_item_from_list(self.list_id, task.id)
                            .await
                            .map_err(SyncError::mutation)?;
                    }
                    TaskStatus::Active => {
                        api.add_item(self.list_id, &task.summary, Some(&task.description))
                            .await
                            .map_err(SyncError::mutation)?;
                    }
                }
            }
        } else {
            debug!(item = task.id, "update target not in snapshot; refreshing only");
        }

        self.coordinator.refresh().await?;
        Ok(())
    }

    /// Delete tasks by id, concurrently and in no particular order.
    ///
    /// All deletes run to completion. If any fail, the first failure is
    /// returned, the deletes that succeeded stay applied, and no refresh
    /// runs; the next successful cycle reconciles the view.
    ///
    /// # Errors
    ///
    /// The first failed delete as [`SyncError::Mutation`] (or
    /// [`SyncError::AuthRequired`]); otherwise refresh failures.
    pub async fn delete(&self, ids: &[ItemId]) -> Result<(), SyncError> {
        let api = self.coordinator.api();
        let results = join_all(ids.iter().map(|id| api.delete_item(*id))).await;

        let mut first_failure = None;
        for (id, result) in ids.iter().zip(results) {
            if let Err(error) = result {
                warn!(item = id, %error, "delete failed");
                first_failure.get_or_insert(SyncError::mutation(error));
            }
        }
        if let Some(error) = first_failure {
            return Err(error);
        }

        self.coordinator.refresh().await?;
        Ok(())
    }

    /// Resolve the current view of `item` across both buckets.
    fn current_task(&self, item: ItemId) -> Result<Option<TaskItem>, SyncError> {
        let snapshot = self
            .coordinator
            .snapshot()
            .ok_or(SyncError::UnknownList(self.list_id))?;
        let data = snapshot
            .get(self.list_id)
            .ok_or(SyncError::UnknownList(self.list_id))?;
        Ok(data
            .items
            .iter()
            .map(|i| TaskItem::from_item(i, TaskStatus::Active))
            .chain(
                data.recent_items
                    .iter()
                    .map(|i| TaskItem::from_item(i, TaskStatus::Completed)),
            )
            .find(|t| t.id == item))
    }
}

fn sorted_tasks(items: &[ShoppingItem], status: TaskStatus) -> Vec<TaskItem> {
    let mut items: Vec<&ShoppingItem> = items.iter().collect();
    items.sort_by_key(|i| i.sort_key());
    items
        .into_iter()
        .map(|i| TaskItem::from_item(i, status))
        .collect()
}
