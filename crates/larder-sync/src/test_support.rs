//! Shared test utilities: an in-memory recording [`ShoppingApi`] with
//! scripted data and failure injection.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use larder_client::{ApiResult, ClientError, ShoppingApi};
use larder_core::{Household, HouseholdId, ItemId, ListId, ShoppingItem, ShoppingList};
use tokio::sync::{Notify, Semaphore};

/// Unranked item shorthand.
pub fn item(id: ItemId, name: &str) -> ShoppingItem {
    ShoppingItem {
        id,
        name: name.to_string(),
        description: None,
        ordering: None,
    }
}

/// Ranked item shorthand.
pub fn ranked_item(id: ItemId, name: &str, ordering: i64) -> ShoppingItem {
    ShoppingItem {
        id,
        name: name.to_string(),
        description: None,
        ordering: Some(ordering),
    }
}

/// A remote call observed by [`FakeApi`], in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListLists,
    ListItems(ListId),
    ListRecent(ListId),
    AddItem {
        list: ListId,
        name: String,
        description: Option<String>,
    },
    UpdateItem {
        item: ItemId,
        name: String,
    },
    UpdateDescription {
        list: ListId,
        item: ItemId,
        description: String,
    },
    RemoveFromList {
        list: ListId,
        item: ItemId,
    },
    DeleteItem(ItemId),
}

/// Gate that lets a test hold the list fetch open to observe in-flight
/// behavior.
struct FetchGate {
    started: Notify,
    release: Semaphore,
}

/// In-memory `ShoppingApi` with scripted data and failure injection.
///
/// Mutations are recorded but do not modify the scripted data; tests adjust
/// it directly through the setters when a cycle should observe changes.
pub struct FakeApi {
    households: Mutex<Vec<Household>>,
    lists: Mutex<Vec<ShoppingList>>,
    items: Mutex<BTreeMap<ListId, Vec<ShoppingItem>>>,
    recent: Mutex<BTreeMap<ListId, Vec<ShoppingItem>>>,
    calls: Mutex<Vec<Call>>,
    next_id: AtomicI64,
    auth_fails: AtomicBool,
    connection_fails: AtomicBool,
    recent_fails_for: Mutex<Option<ListId>>,
    recent_times_out_for: Mutex<Option<ListId>>,
    failing_deletes: Mutex<Vec<ItemId>>,
    gate: Option<FetchGate>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            households: Mutex::new(vec![Household {
                id: 1,
                name: "Home".to_string(),
            }]),
            lists: Mutex::new(Vec::new()),
            items: Mutex::new(BTreeMap::new()),
            recent: Mutex::new(BTreeMap::new()),
            calls: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1000),
            auth_fails: AtomicBool::new(false),
            connection_fails: AtomicBool::new(false),
            recent_fails_for: Mutex::new(None),
            recent_times_out_for: Mutex::new(None),
            failing_deletes: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Script a list with its two item buckets.
    pub fn with_list(
        self,
        id: ListId,
        name: &str,
        items: Vec<ShoppingItem>,
        recent: Vec<ShoppingItem>,
    ) -> Self {
        self.lists.lock().unwrap().push(ShoppingList {
            id,
            name: name.to_string(),
        });
        self.items.lock().unwrap().insert(id, items);
        self.recent.lock().unwrap().insert(id, recent);
        self
    }

    /// Hold every list fetch open until [`Self::release_fetch`].
    pub fn gated(mut self) -> Self {
        self.gate = Some(FetchGate {
            started: Notify::new(),
            release: Semaphore::new(0),
        });
        self
    }

    pub fn set_items(&self, list: ListId, items: Vec<ShoppingItem>) {
        self.items.lock().unwrap().insert(list, items);
    }

    pub fn set_households(&self, households: Vec<Household>) {
        *self.households.lock().unwrap() = households;
    }

    /// Fail every call with an auth failure from now on.
    pub fn fail_auth(&self) {
        self.auth_fails.store(true, Ordering::SeqCst);
    }

    /// Fail the connection test with a request failure.
    pub fn fail_connection(&self) {
        self.connection_fails.store(true, Ordering::SeqCst);
    }

    /// Fail the recent-items fetch for one list with a request failure.
    pub fn fail_recent_for(&self, list: ListId) {
        *self.recent_fails_for.lock().unwrap() = Some(list);
    }

    /// Fail the recent-items fetch for one list with a timeout.
    pub fn fail_timeout_for(&self, list: ListId) {
        *self.recent_times_out_for.lock().unwrap() = Some(list);
    }

    /// Fail the delete call for one item with a request failure.
    pub fn fail_delete_of(&self, item: ItemId) {
        self.failing_deletes.lock().unwrap().push(item);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn count_list_fetches(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, Call::ListLists))
            .count()
    }

    /// Wait until a gated list fetch is in flight.
    ///
    /// # Panics
    ///
    /// Panics when the fake was not built with [`Self::gated`].
    pub async fn wait_until_fetching(&self) {
        self.gate
            .as_ref()
            .expect("fake not gated")
            .started
            .notified()
            .await;
    }

    /// Let one gated list fetch proceed.
    pub fn release_fetch(&self) {
        self.gate
            .as_ref()
            .expect("fake not gated")
            .release
            .add_permits(1);
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_auth(&self) -> ApiResult<()> {
        if self.auth_fails.load(Ordering::SeqCst) {
            Err(auth_failure())
        } else {
            Ok(())
        }
    }
}

impl Default for FakeApi {
    fn default() -> Self {
        Self::new()
    }
}

fn auth_failure() -> ClientError {
    ClientError::Auth {
        status: 401,
        message: "invalid token".to_string(),
    }
}

fn request_failure() -> ClientError {
    ClientError::Api {
        status: 500,
        message: "injected failure".to_string(),
    }
}

#[async_trait]
impl ShoppingApi for FakeApi {
    async fn test_connection(&self) -> ApiResult<()> {
        self.check_auth()?;
        if self.connection_fails.load(Ordering::SeqCst) {
            return Err(request_failure());
        }
        Ok(())
    }

    async fn list_households(&self) -> ApiResult<Vec<Household>> {
        self.check_auth()?;
        Ok(self.households.lock().unwrap().clone())
    }

    async fn list_shopping_lists(&self, _household: HouseholdId) -> ApiResult<Vec<ShoppingList>> {
        self.record(Call::ListLists);
        self.check_auth()?;
        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release
                .acquire()
                .await
                .expect("gate semaphore closed")
                .forget();
        }
        Ok(self.lists.lock().unwrap().clone())
    }

    async fn list_items(&self, list: ListId) -> ApiResult<Vec<ShoppingItem>> {
        self.record(Call::ListItems(list));
        self.check_auth()?;
        Ok(self.items.lock().unwrap().get(&list).cloned().unwrap_or_default())
    }

    async fn list_recent_items(&self, list: ListId) -> ApiResult<Vec<ShoppingItem>> {
        self.record(Call::ListRecent(list));
        self.check_auth()?;
        if *self.recent_fails_for.lock().unwrap() == Some(list) {
            return Err(request_failure());
        }
        if *self.recent_times_out_for.lock().unwrap() == Some(list) {
            return Err(ClientError::Timeout);
        }
        Ok(self.recent.lock().unwrap().get(&list).cloned().unwrap_or_default())
    }

    async fn add_item(
        &self,
        list: ListId,
        name: &str,
        description: Option<&str>,
    ) -> ApiResult<ShoppingItem> {
        self.record(Call::AddItem {
            list,
            name: name.to_string(),
            description: description.map(str::to_string),
        });
        self.check_auth()?;
        Ok(ShoppingItem {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: name.to_string(),
            description: description.map(str::to_string),
            ordering: None,
        })
    }

    async fn update_item(&self, item: ItemId, name: &str) -> ApiResult<ShoppingItem> {
        self.record(Call::UpdateItem {
            item,
            name: name.to_string(),
        });
        self.check_auth()?;
        Ok(ShoppingItem {
            id: item,
            name: name.to_string(),
            description: None,
            ordering: None,
        })
    }

    async fn update_item_description(
        &self,
        list: ListId,
        item: ItemId,
        description: &str,
    ) -> ApiResult<ShoppingItem> {
        self.record(Call::UpdateDescription {
            list,
            item,
            description: description.to_string(),
        });
        self.check_auth()?;
        Ok(ShoppingItem {
            id: item,
            name: String::new(),
            description: Some(description.to_string()),
            ordering: None,
        })
    }

    async fn remove_item_from_list(&self, list: ListId, item: ItemId) -> ApiResult<()> {
        self.record(Call::RemoveFromList { list, item });
        self.check_auth()?;
        Ok(())
    }

    async fn delete_item(&self, item: ItemId) -> ApiResult<()> {
        self.record(Call::DeleteItem(item));
        self.check_auth()?;
        if self.failing_deletes.lock().unwrap().contains(&item) {
            return Err(request_failure());
        }
        Ok(())
    }
}
