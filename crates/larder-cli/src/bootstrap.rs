//! Shared setup: config to client to validated, bootstrapped coordinator.

use std::sync::Arc;

use anyhow::Context;
use larder_client::{LarderClient, ShoppingApi};
use larder_config::{ConfigError, LarderConfig};
use larder_sync::{Coordinator, SyncError};

/// Build the client from config, validate the connection and household, and
/// run the blocking initial refresh.
pub async fn coordinator(config: &LarderConfig) -> anyhow::Result<Arc<Coordinator>> {
    config.require_sync_ready().context(
        "set LARDER_SERVER__HOST, LARDER_SERVER__ACCESS_TOKEN, and LARDER_SYNC__HOUSEHOLD_ID \
         or add them to .larder/config.toml",
    )?;
    let household = config.sync.household_id.ok_or(ConfigError::NotConfigured {
        section: "sync".to_string(),
    })?;

    let client = LarderClient::new(
        &config.server.host,
        &config.server.access_token,
        config.server.verify_ssl,
    )?;
    let api: Arc<dyn ShoppingApi> = Arc::new(client);

    larder_sync::setup::establish(api, household)
        .await
        .map_err(|error| match error {
            SyncError::AuthRequired(_) => {
                anyhow::anyhow!("{error}; update the access token and retry")
            }
            SyncError::Validation(_) => anyhow::anyhow!(error),
            other => anyhow::anyhow!("{other}; not ready, will work once the server is reachable"),
        })
}
