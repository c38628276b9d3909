//! Shopping-list fetch endpoints.

use larder_core::{HouseholdId, ListId, ShoppingItem, ShoppingList};

use crate::{ApiResult, LarderClient, http::check_response};

impl LarderClient {
    /// Shopping lists of one household.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] if the request fails or the response
    /// cannot be parsed.
    pub async fn list_shopping_lists(
        &self,
        household: HouseholdId,
    ) -> ApiResult<Vec<ShoppingList>> {
        let resp = check_response(
            self.get(&format!("/api/household/{household}/shoppinglist"))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// Active items of a list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] if the request fails or the response
    /// cannot be parsed.
    pub async fn list_items(&self, list: ListId) -> ApiResult<Vec<ShoppingItem>> {
        let resp = check_response(
            self.get(&format!("/api/shoppinglist/{list}/items"))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// Recently completed items of a list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] if the request fails or the response
    /// cannot be parsed.
    pub async fn list_recent_items(&self, list: ListId) -> ApiResult<Vec<ShoppingItem>> {
        let resp = check_response(
            self.get(&format!("/api/shoppinglist/{list}/recent-items"))
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }
}
