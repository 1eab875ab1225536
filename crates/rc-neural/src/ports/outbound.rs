//! Outbound ports for the neural consensus gateway.
//!
//! The scoring engine and the research-credit source both live in other
//! processes. These traits model them as remote capabilities so the cache
//! and synchronization logic can be tested without either one running.

use crate::domain::error::NeuralResult;
use async_trait::async_trait;

/// Bridge to the external scoring engine.
///
/// The gateway does not interpret what the engine computes; it forwards
/// requests and returns results. Every method may fail with
/// `NeuralError::BridgeUnavailable` when the engine cannot be reached.
#[async_trait]
pub trait ScoringBridge: Send + Sync {
    /// Compute a fresh consensus fingerprint.
    async fn compute_hash(&self) -> NeuralResult<String>;

    /// Compute a fresh contract payload.
    async fn compute_contract(&self) -> NeuralResult<String>;

    /// Invoke an opaque named function with opaque data, returning its
    /// numeric result.
    async fn execute(&self, function: &str, data: &str) -> NeuralResult<f64>;

    /// Live status probe. Returns the engine's self-reported status value,
    /// or 0 when the engine is unreachable.
    async fn probe(&self) -> i64;
}

/// Research-credit data source consumed by quorum synchronization.
///
/// The source returns already-reconciled hash and contract material for the
/// given participant and quorum payload. The reconciliation policy is
/// external to this node.
#[async_trait]
pub trait ResearchSource: Send + Sync {
    /// Fetch new consensus material for the given CPID and quorum payload.
    ///
    /// Returns `(fingerprint, contract_payload)` on success.
    async fn fetch(&self, cpid: &str, quorum_data: &str) -> NeuralResult<(String, String)>;
}

/// Time source trait for testability
pub trait TimeSource: Send + Sync {
    /// Current Unix timestamp in seconds.
    fn now(&self) -> u64;
}

/// System time implementation
#[derive(Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}
