use anyhow::bail;
use larder_config::LarderConfig;
use larder_sync::{SyncError, refresh_ticker};
use tracing::warn;

use crate::bootstrap;
use crate::commands::lists;

/// Handle `larder watch`: refresh and render on the configured interval
/// until interrupted.
pub async fn handle(config: &LarderConfig) -> anyhow::Result<()> {
    let coordinator = bootstrap::coordinator(config).await?;
    lists::render(&coordinator);

    let mut ticker = refresh_ticker(config.sync.poll_interval()).await;
    loop {
        ticker.tick().await;
        match coordinator.refresh().await {
            Ok(_) => lists::render(&coordinator),
            Err(error @ SyncError::AuthRequired(_)) => {
                bail!("{error}; update the access token and restart")
            }
            Err(error) => warn!(%error, "refresh failed; retrying next cycle"),
        }
    }
}
