//! Polling refresh coordinator.
//!
//! Owns the single consolidated [`Snapshot`] for one household and the
//! refresh cycle that produces it. A cycle fetches the household's shopping
//! lists, then both item buckets of every list, and publishes the assembled
//! mapping atomically. Any fetch failure aborts the whole cycle; the
//! previous snapshot stays in place.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use larder_client::ShoppingApi;
use larder_core::{HouseholdId, ListData, Snapshot};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::error::SyncError;

/// Periodically reconciles remote shopping-list state into an immutable
/// snapshot shared read-only with every consumer.
///
/// At most one refresh cycle runs at a time. A caller requesting a refresh
/// while one is in flight waits for that cycle and adopts its outcome
/// instead of starting a second fetch (single-flight).
pub struct Coordinator {
    api: Arc<dyn ShoppingApi>,
    household: HouseholdId,
    /// Serializes cycles; holding it means a cycle is running.
    refresh_gate: Mutex<()>,
    /// Bumped once per completed cycle, success or failure. Callers sample
    /// it before acquiring the gate to detect a cycle that finished while
    /// they waited.
    generation: AtomicU64,
    /// Last published snapshot. `None` until the first successful cycle.
    snapshot: RwLock<Option<Arc<Snapshot>>>,
    /// Outcome of the most recent completed cycle, for attached waiters.
    last_cycle: RwLock<Result<(), SyncError>>,
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("household", &self.household)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Coordinator {
    #[must_use]
    pub fn new(api: Arc<dyn ShoppingApi>, household: HouseholdId) -> Arc<Self> {
        Arc::new(Self {
            api,
            household,
            refresh_gate: Mutex::new(()),
            generation: AtomicU64::new(0),
            snapshot: RwLock::new(None),
            last_cycle: RwLock::new(Ok(())),
        })
    }

    /// Remote API handle, for views issuing mutations.
    #[must_use]
    pub fn api(&self) -> &Arc<dyn ShoppingApi> {
        &self.api
    }

    /// Current snapshot, if at least one cycle has succeeded.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.read().expect("snapshot lock poisoned").clone()
    }

    /// True once a snapshot has been published.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Mandatory blocking initial refresh. The consumer is not ready until
    /// this succeeds; auth problems surface as [`SyncError::AuthRequired`],
    /// anything else as a transient not-ready failure.
    ///
    /// # Errors
    ///
    /// Propagates the first cycle's [`SyncError`].
    pub async fn bootstrap(&self) -> Result<Arc<Snapshot>, SyncError> {
        let snapshot = self.refresh().await?;
        debug!(lists = snapshot.len(), "initial refresh complete");
        Ok(snapshot)
    }

    /// Run one refresh cycle, or attach to the one already in flight.
    ///
    /// # Errors
    ///
    /// [`SyncError::AuthRequired`] when the credential was rejected,
    /// [`SyncError::Refresh`] for transient failures. In both cases the
    /// previously published snapshot is retained.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, SyncError> {
        let observed = self.generation.load(Ordering::Acquire);
        let _gate = self.refresh_gate.lock().await;
        if self.generation.load(Ordering::Acquire) != observed {
            // A cycle completed while we waited for the gate; adopt its
            // outcome instead of fetching again.
            return self.last_outcome();
        }

        let result = match self.run_cycle().await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                *self.snapshot.write().expect("snapshot lock poisoned") =
                    Some(Arc::clone(&snapshot));
                *self.last_cycle.write().expect("cycle lock poisoned") = Ok(());
                Ok(snapshot)
            }
            Err(error) => {
                warn!(%error, "refresh cycle failed; previous snapshot retained");
                *self.last_cycle.write().expect("cycle lock poisoned") = Err(error.clone());
                Err(error)
            }
        };
        self.generation.fetch_add(1, Ordering::Release);
        result
    }

    /// Start the fixed-interval polling loop.
    ///
    /// Failures are logged and the loop keeps going, retrying on the next
    /// tick.
    pub fn spawn_poller(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let coordinator = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = refresh_ticker(interval).await;
            loop {
                ticker.tick().await;
                if let Err(error) = coordinator.refresh().await {
                    warn!(%error, "scheduled refresh failed");
                }
            }
        })
    }

    fn last_outcome(&self) -> Result<Arc<Snapshot>, SyncError> {
        match &*self.last_cycle.read().expect("cycle lock poisoned") {
            Ok(()) => self
                .snapshot()
                .ok_or_else(|| SyncError::Refresh("no snapshot published yet".to_string())),
            Err(error) => Err(error.clone()),
        }
    }

    async fn run_cycle(&self) -> Result<Snapshot, SyncError> {
        let lists = self.api.list_shopping_lists(self.household).await?;
        debug!(lists = lists.len(), "fetched shopping lists");

        let mut data = BTreeMap::new();
        for list in lists {
            let (items, recent_items) =
                tokio::join!(self.api.list_items(list.id), self.api.list_recent_items(list.id));
            let (items, recent_items) = (items?, recent_items?);

            // An id present in both buckets counts as active only, so every
            // item appears exactly once in the combined set.
            let active_ids: HashSet<_> = items.iter().map(|i| i.id).collect();
            let recent_items = recent_items
                .into_iter()
                .filter(|i| !active_ids.contains(&i.id))
                .collect();

            data.insert(
                list.id,
                ListData {
                    list,
                    items,
                    recent_items,
                },
            );
        }
        Ok(Snapshot::new(data))
    }
}

/// Interval ticker for scheduled refreshes: delays missed ticks instead of
/// bursting, and the immediate first tick is already consumed. The first
/// `tick().await` on the returned ticker completes one full interval after
/// the call, since the initial snapshot comes from [`Coordinator::bootstrap`]
/// rather than a tick.
pub async fn refresh_ticker(interval: Duration) -> tokio::time::Interval {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;
    ticker
}
