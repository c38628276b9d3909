//! Item mutation endpoints.

use larder_core::{ItemId, ListId, ShoppingItem};
use tracing::debug;

use crate::{ApiResult, LarderClient, http::check_response};

impl LarderClient {
    /// Add an item to a list by name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] if the request fails or the response
    /// cannot be parsed.
    pub async fn add_item(
        &self,
        list: ListId,
        name: &str,
        description: Option<&str>,
    ) -> ApiResult<ShoppingItem> {
        let mut body = serde_json::json!({ "name": name });
        if let Some(description) = description {
            body["description"] = description.into();
        }
        let resp = check_response(
            self.post(&format!("/api/shoppinglist/{list}/add-item-by-name"))
                .json(&body)
                .send()
                .await?,
        )
        .await?;
        debug!(list, name, "added item");
        Ok(resp.json().await?)
    }

    /// Rename an item.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] if the request fails or the response
    /// cannot be parsed.
    pub async fn update_item(&self, item: ItemId, name: &str) -> ApiResult<ShoppingItem> {
        let resp = check_response(
            self.post(&format!("/api/item/{item}"))
                .json(&serde_json::json!({ "name": name }))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// Replace an item's description. An empty string clears it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] if the request fails or the response
    /// cannot be parsed.
    pub async fn update_item_description(
        &self,
        list: ListId,
        item: ItemId,
        description: &str,
    ) -> ApiResult<ShoppingItem> {
        let resp = check_response(
            self.post(&format!("/api/shoppinglist/{list}/item/{item}/description"))
                .json(&serde_json::json!({ "description": description }))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// Take an item off its list. The server moves it to the recently
    /// completed bucket.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] if the request fails.
    pub async fn remove_item_from_list(&self, list: ListId, item: ItemId) -> ApiResult<()> {
        check_response(
            self.delete(&format!("/api/shoppinglist/{list}/item/{item}"))
                .send()
                .await?,
        )
        .await?;
        debug!(list, item, "removed item from list");
        Ok(())
    }

    /// Delete an item permanently.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] if the request fails.
    pub async fn delete_item(&self, item: ItemId) -> ApiResult<()> {
        check_response(self.delete(&format!("/api/item/{item}")).send().await?).await?;
        debug!(item, "deleted item");
        Ok(())
    }
}
