//! # larder-client
//!
//! Typed async HTTP client for a KitchenOwl-compatible shopping-list server.
//!
//! All calls go through the [`ShoppingApi`] trait so the sync layer runs
//! identically against this HTTP implementation and in-memory fakes. Every
//! call can fail with a classified [`ClientError`]: auth failure, timeout,
//! or request failure.

mod error;
mod households;
mod http;
mod items;
mod shoppinglists;

pub use error::ClientError;

use std::time::Duration;

use async_trait::async_trait;
use larder_core::{Household, HouseholdId, ItemId, ListId, ShoppingItem, ShoppingList};

/// Result alias for remote-service calls.
pub type ApiResult<T> = Result<T, ClientError>;

/// Remote shopping-service operations.
///
/// Implemented by [`LarderClient`] for production and by in-memory fakes in
/// tests, keeping the coordinator and view code paths identical in both.
#[async_trait]
pub trait ShoppingApi: Send + Sync {
    /// Cheap connectivity and credential probe.
    async fn test_connection(&self) -> ApiResult<()>;

    /// All households the credential has access to.
    async fn list_households(&self) -> ApiResult<Vec<Household>>;

    /// Shopping lists of one household.
    async fn list_shopping_lists(&self, household: HouseholdId) -> ApiResult<Vec<ShoppingList>>;

    /// Active (not yet completed) items of a list.
    async fn list_items(&self, list: ListId) -> ApiResult<Vec<ShoppingItem>>;

    /// Recently completed items of a list, retained by the server for quick
    /// re-adding.
    async fn list_recent_items(&self, list: ListId) -> ApiResult<Vec<ShoppingItem>>;

    /// Add an item to a list by name.
    async fn add_item(
        &self,
        list: ListId,
        name: &str,
        description: Option<&str>,
    ) -> ApiResult<ShoppingItem>;

    /// Rename an item.
    async fn update_item(&self, item: ItemId, name: &str) -> ApiResult<ShoppingItem>;

    /// Replace an item's description. Cleared descriptions are sent as an
    /// explicit empty string, never omitted.
    async fn update_item_description(
        &self,
        list: ListId,
        item: ItemId,
        description: &str,
    ) -> ApiResult<ShoppingItem>;

    /// Take an item off the list (marks it recently completed server-side).
    async fn remove_item_from_list(&self, list: ListId, item: ItemId) -> ApiResult<()>;

    /// Delete an item permanently.
    async fn delete_item(&self, item: ItemId) -> ApiResult<()>;
}

/// HTTP client for a KitchenOwl-compatible server.
pub struct LarderClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl LarderClient {
    /// Build a client for `host` authenticating with bearer `token`.
    ///
    /// `verify_ssl: false` disables TLS certificate verification, for
    /// self-signed test servers only.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(host: &str, token: &str, verify_ssl: bool) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent("larder/0.1")
            .timeout(Duration::from_secs(10))
            .danger_accept_invalid_certs(!verify_ssl)
            .build()?;
        Ok(Self {
            http,
            base_url: host.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path)).bearer_auth(&self.token)
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path)).bearer_auth(&self.token)
    }

    pub(crate) fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.delete(self.url(path)).bearer_auth(&self.token)
    }
}

#[async_trait]
impl ShoppingApi for LarderClient {
    async fn test_connection(&self) -> ApiResult<()> {
        Self::test_connection(self).await
    }

    async fn list_households(&self) -> ApiResult<Vec<Household>> {
        Self::list_households(self).await
    }

    async fn list_shopping_lists(&self, household: HouseholdId) -> ApiResult<Vec<ShoppingList>> {
        Self::list_shopping_lists(self, household).await
    }

    async fn list_items(&self, list: ListId) -> ApiResult<Vec<ShoppingItem>> {
        Self::list_items(self, list).await
    }

    async fn list_recent_items(&self, list: ListId) -> ApiResult<Vec<ShoppingItem>> {
        Self::list_recent_items(self, list).await
    }

    async fn add_item(
        &self,
        list: ListId,
        name: &str,
        description: Option<&str>,
    ) -> ApiResult<ShoppingItem> {
        Self::add_item(self, list, name, description).await
    }

    async fn update_item(&self, item: ItemId, name: &str) -> ApiResult<ShoppingItem> {
        Self::update_item(self, item, name).await
    }

    async fn update_item_description(
        &self,
        list: ListId,
        item: ItemId,
        description: &str,
    ) -> ApiResult<ShoppingItem> {
        Self::update_item_description(self, list, item, description).await
    }

    async fn remove_item_from_list(&self, list: ListId, item: ItemId) -> ApiResult<()> {
        Self::remove_item_from_list(self, list, item).await
    }

    async fn delete_item(&self, item: ItemId) -> ApiResult<()> {
        Self::delete_item(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = LarderClient::new("https://kitchenowl.example/", "token", true).unwrap();
        assert_eq!(
            client.url("/api/household"),
            "https://kitchenowl.example/api/household"
        );
    }

    #[test]
    fn base_url_without_trailing_slash() {
        let client = LarderClient::new("https://kitchenowl.example", "token", true).unwrap();
        assert_eq!(client.url("/api/health"), "https://kitchenowl.example/api/health");
    }
}
