use std::sync::Arc;

use larder_config::LarderConfig;
use larder_sync::TaskList;

use crate::bootstrap;
use crate::cli::RmArgs;

/// Handle `larder rm`.
pub async fn handle(args: &RmArgs, config: &LarderConfig) -> anyhow::Result<()> {
    let coordinator = bootstrap::coordinator(config).await?;
    let view = TaskList::new(Arc::clone(&coordinator), args.list);

    view.delete(&args.items).await?;
    println!("deleted {} item(s)", args.items.len());
    Ok(())
}
