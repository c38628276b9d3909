use std::sync::Arc;

use larder_config::LarderConfig;
use larder_core::{TaskDraft, TaskStatus};
use larder_sync::TaskList;

use crate::bootstrap;
use crate::cli::AddArgs;

/// Handle `larder add`.
pub async fn handle(args: &AddArgs, config: &LarderConfig) -> anyhow::Result<()> {
    let coordinator = bootstrap::coordinator(config).await?;
    let view = TaskList::new(Arc::clone(&coordinator), args.list);

    view.create(&TaskDraft {
        summary: args.summary.clone(),
        description: args.description.clone(),
        status: TaskStatus::Active,
    })
    .await?;

    let name = view.name().unwrap_or_else(|| args.list.to_string());
    println!("added '{}' to {name}", args.summary);
    Ok(())
}
