//! Consensus cache - the single source of truth for synchronous reads.
//!
//! One owned object created at node startup with empty values and torn down
//! at shutdown. All access goes through accessor methods; there are no
//! ambient globals. Dispatcher threads read concurrently while a completed
//! fetch or synchronization replaces the contents (multiple readers, single
//! writer).

use crate::domain::types::{NeuralContract, NeuralHash};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cached consensus state: last known neural hash, neural contract, and the
/// quorum-sync in-flight flag.
///
/// Invariants:
/// - Hash and contract are only replaced by a completed synchronous fetch or
///   a completed synchronization, never partially updated.
/// - At most one synchronization is in flight at any instant; the flag is
///   tested-and-set atomically.
pub struct ConsensusCache {
    hash: RwLock<NeuralHash>,
    contract: RwLock<NeuralContract>,
    sync_in_flight: AtomicBool,
}

impl ConsensusCache {
    /// Create an empty cache. Called once at node startup.
    pub fn new() -> Self {
        Self {
            hash: RwLock::new(NeuralHash::empty()),
            contract: RwLock::new(NeuralContract::empty()),
            sync_in_flight: AtomicBool::new(false),
        }
    }

    /// Last known neural hash.
    pub fn hash(&self) -> NeuralHash {
        self.hash.read().clone()
    }

    /// Last known neural contract.
    pub fn contract(&self) -> NeuralContract {
        self.contract.read().clone()
    }

    /// Elapsed seconds since the contract's own update, independent of when
    /// the cache was last read.
    pub fn contract_age(&self, now: u64) -> u64 {
        self.contract.read().age(now)
    }

    /// Replace the hash after a completed synchronous fetch.
    pub fn store_hash(&self, hash: NeuralHash) {
        *self.hash.write() = hash;
    }

    /// Replace the contract after a completed synchronous fetch.
    pub fn store_contract(&self, contract: NeuralContract) {
        *self.contract.write() = contract;
    }

    /// Replace hash and contract together after a completed synchronization.
    ///
    /// Both write guards are held for the duration of the swap so readers
    /// never observe a half-updated pair.
    pub fn store_sync_result(&self, hash: NeuralHash, contract: NeuralContract) {
        let mut hash_guard = self.hash.write();
        let mut contract_guard = self.contract.write();
        *hash_guard = hash;
        *contract_guard = contract;
    }

    /// Atomically claim the single synchronization slot.
    ///
    /// Returns `true` when the caller now owns the in-flight slot and must
    /// later release it with [`finish_sync`](Self::finish_sync).
    pub fn begin_sync(&self) -> bool {
        self.sync_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Release the synchronization slot, on completion or failure.
    pub fn finish_sync(&self) {
        self.sync_in_flight.store(false, Ordering::Release);
    }

    /// True while a synchronization is in flight.
    pub fn sync_in_flight(&self) -> bool {
        self.sync_in_flight.load(Ordering::Acquire)
    }

    /// Clear cached values. Called at node shutdown.
    pub fn clear(&self) {
        self.store_sync_result(NeuralHash::empty(), NeuralContract::empty());
    }
}

impl Default for ConsensusCache {
    fn default() -> Self {
        Self::new()
    }
}
