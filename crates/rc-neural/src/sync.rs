//! Quorum synchronization - asynchronous, single-flight refresh of
//! research-credit consensus data.
//!
//! The caller's contract is a boolean: `true` means the refresh was accepted
//! and started, `false` means one was already in flight. There is no result
//! channel back to the caller beyond the next cache read; the spawned task's
//! outcome is logged and its handle retained so completion can be observed
//! by monitoring and by tests.

use crate::cache::ConsensusCache;
use crate::domain::types::{NeuralContract, NeuralHash, SyncRequest};
use crate::ports::outbound::{ResearchSource, SystemTimeSource, TimeSource};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Releases the in-flight slot when the refresh task exits, however it
/// exits. A panicking [`ResearchSource`] must not wedge all future syncs.
struct SyncSlot {
    cache: Arc<ConsensusCache>,
}

impl Drop for SyncSlot {
    fn drop(&mut self) {
        self.cache.finish_sync();
    }
}

/// Single-flight DPOR synchronization driver.
///
/// At most one refresh runs at any instant, system-wide. A second request
/// during that window is rejected, not queued and not merged; callers retry
/// on their own schedule.
pub struct QuorumSync {
    cache: Arc<ConsensusCache>,
    source: Arc<dyn ResearchSource>,
    time_source: Arc<dyn TimeSource>,
    /// Handle of the most recently spawned refresh task.
    last_task: Mutex<Option<JoinHandle<()>>>,
}

impl QuorumSync {
    pub fn new(cache: Arc<ConsensusCache>, source: Arc<dyn ResearchSource>) -> Self {
        Self {
            cache,
            source,
            time_source: Arc::new(SystemTimeSource),
            last_task: Mutex::new(None),
        }
    }

    /// Set custom time source (for testing)
    pub fn with_time_source(mut self, time_source: Arc<dyn TimeSource>) -> Self {
        self.time_source = time_source;
        self
    }

    /// Begin an asynchronous refresh of research-credit data.
    ///
    /// Returns `false` immediately when a refresh is already in flight,
    /// without starting a second one and without touching the request.
    /// Returns `true` when the refresh was accepted and started; acceptance
    /// does not imply completion.
    pub fn synchronize_dpor(&self, request: SyncRequest) -> bool {
        if !self.cache.begin_sync() {
            info!(cpid = %request.cpid, "Quorum sync already in flight, rejecting");
            return false;
        }

        let cache = Arc::clone(&self.cache);
        let source = Arc::clone(&self.source);
        let time_source = Arc::clone(&self.time_source);

        let handle = tokio::spawn(async move {
            let _slot = SyncSlot {
                cache: Arc::clone(&cache),
            };
            let cpid = request.cpid;
            match source.fetch(&cpid, &request.quorum_data).await {
                Ok((fingerprint, payload)) => {
                    let now = time_source.now();
                    cache.store_sync_result(
                        NeuralHash::new(fingerprint, now),
                        NeuralContract::new(payload, now),
                    );
                    info!(cpid = %cpid, updated_at = now, "Quorum sync completed");
                }
                Err(e) => {
                    // Prior cache contents stay untouched on failure.
                    warn!(cpid = %cpid, error = %e, "Quorum sync failed");
                }
            }
        });

        *self.last_task.lock() = Some(handle);
        true
    }

    /// True while a refresh task is running.
    pub fn in_flight(&self) -> bool {
        self.cache.sync_in_flight()
    }

    /// Wait for the most recently started refresh to finish.
    ///
    /// Completion signal for monitoring and tests; the boolean contract of
    /// [`synchronize_dpor`](Self::synchronize_dpor) is unchanged.
    pub async fn wait_idle(&self) {
        let handle = self.last_task.lock().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}
