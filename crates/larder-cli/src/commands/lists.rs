use std::sync::Arc;

use larder_config::LarderConfig;
use larder_core::TaskStatus;
use larder_sync::{Coordinator, TaskList};

use crate::bootstrap;

/// Handle `larder lists`.
pub async fn handle(config: &LarderConfig) -> anyhow::Result<()> {
    let coordinator = bootstrap::coordinator(config).await?;
    render(&coordinator);
    Ok(())
}

/// Render every list in the current snapshot with its ordered tasks.
pub fn render(coordinator: &Arc<Coordinator>) {
    let Some(snapshot) = coordinator.snapshot() else {
        return;
    };
    for (id, data) in snapshot.iter() {
        println!("{} (#{id})", data.list.name);
        let view = TaskList::new(Arc::clone(coordinator), id);
        for task in view.items() {
            let mark = match task.status {
                TaskStatus::Completed => "x",
                TaskStatus::Active => " ",
            };
            if task.description.is_empty() {
                println!("  [{mark}] {} (#{})", task.summary, task.id);
            } else {
                println!("  [{mark}] {} (#{}): {}", task.summary, task.id, task.description);
            }
        }
    }
}
