use std::sync::Arc;

use anyhow::Context;
use larder_config::LarderConfig;
use larder_core::TaskStatus;
use larder_sync::TaskList;

use crate::bootstrap;
use crate::cli::StatusArgs;

/// Handle `larder done` (`complete: true`) and `larder reopen`
/// (`complete: false`).
pub async fn handle(args: &StatusArgs, complete: bool, config: &LarderConfig) -> anyhow::Result<()> {
    let coordinator = bootstrap::coordinator(config).await?;
    let view = TaskList::new(Arc::clone(&coordinator), args.list);

    let mut task = view
        .items()
        .into_iter()
        .find(|t| t.id == args.item)
        .with_context(|| format!("item {} not found in list {}", args.item, args.list))?;

    let target = if complete {
        TaskStatus::Completed
    } else {
        TaskStatus::Active
    };
    if task.status == target {
        println!("'{}' already in the requested state", task.summary);
        return Ok(());
    }
    task.status = target;
    view.update(&task).await?;

    let verb = if complete { "completed" } else { "reopened" };
    println!("{verb} '{}'", task.summary);
    Ok(())
}
