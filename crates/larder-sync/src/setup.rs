//! Connection and household validation ahead of the first refresh.

use std::sync::Arc;

use larder_client::ShoppingApi;
use larder_core::HouseholdId;
use tracing::debug;

use crate::coordinator::Coordinator;
use crate::error::SyncError;

/// Validate connectivity, credentials, and the configured household, then
/// run the mandatory blocking initial refresh.
///
/// Setup does not complete until one full cycle has produced a snapshot.
///
/// # Errors
///
/// [`SyncError::AuthRequired`] for credential problems (surfaces a
/// re-authentication requirement), [`SyncError::Validation`] when the
/// configured household does not exist on the server (definitive setup
/// failure), [`SyncError::Refresh`] for transient failures (not ready,
/// retry later).
pub async fn establish(
    api: Arc<dyn ShoppingApi>,
    household: HouseholdId,
) -> Result<Arc<Coordinator>, SyncError> {
    api.test_connection().await?;

    let households = api.list_households().await?;
    if households.is_empty() {
        return Err(SyncError::Validation(
            "no households found on server".to_string(),
        ));
    }
    if !households.iter().any(|h| h.id == household) {
        return Err(SyncError::Validation(format!(
            "household {household} not found on server"
        )));
    }
    debug!(household, "household validated");

    let coordinator = Coordinator::new(api, household);
    coordinator.bootstrap().await?;
    Ok(coordinator)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{FakeApi, item};

    #[tokio::test]
    async fn establish_validates_and_bootstraps() {
        let api = Arc::new(FakeApi::new().with_list(10, "Groceries", vec![item(1, "Milk")], vec![]));
        let coordinator = establish(api, 1).await.unwrap();
        assert!(coordinator.is_ready());
        assert_eq!(coordinator.snapshot().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn establish_rejects_unknown_household() {
        let api = Arc::new(FakeApi::new().with_list(10, "Groceries", vec![], vec![]));
        let err = establish(api, 42).await.unwrap_err();
        assert!(matches!(err, SyncError::Validation(_)));
    }

    #[tokio::test]
    async fn establish_rejects_empty_household_list() {
        let api = Arc::new(FakeApi::new());
        api.set_households(Vec::new());
        let err = establish(api, 1).await.unwrap_err();
        assert!(matches!(err, SyncError::Validation(_)));
    }

    #[tokio::test]
    async fn establish_classifies_auth_failure() {
        let api = Arc::new(FakeApi::new());
        api.fail_auth();
        let err = establish(api, 1).await.unwrap_err();
        assert!(matches!(err, SyncError::AuthRequired(_)));
    }

    #[tokio::test]
    async fn establish_classifies_transient_failure_as_not_ready() {
        let api = Arc::new(FakeApi::new());
        api.fail_connection();
        let err = establish(api, 1).await.unwrap_err();
        assert!(matches!(err, SyncError::Refresh(_)));
    }
}
