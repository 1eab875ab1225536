//! Core value types: neural hash, neural contract, sync request.
//!
//! Hash and contract are opaque to this node. They are produced by the
//! external scoring engine, replaced wholesale on every update, and never
//! mutated in place.

/// Consensus fingerprint computed by the external scoring engine.
///
/// The fingerprint may be empty before the first computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeuralHash {
    /// Opaque fingerprint string.
    pub fingerprint: String,
    /// Unix timestamp of the last synchronous computation.
    pub computed_at: u64,
}

impl NeuralHash {
    /// Create a hash computed at the given timestamp.
    pub fn new(fingerprint: impl Into<String>, computed_at: u64) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            computed_at,
        }
    }

    /// An empty hash, the state before any computation has happened.
    pub fn empty() -> Self {
        Self {
            fingerprint: String::new(),
            computed_at: 0,
        }
    }

    /// True if no fingerprint has ever been computed.
    pub fn is_empty(&self) -> bool {
        self.fingerprint.is_empty()
    }
}

/// Most recently agreed research-credit payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeuralContract {
    /// Opaque content blob.
    pub payload: String,
    /// Unix timestamp of the contract's own last update.
    pub updated_at: u64,
}

impl NeuralContract {
    /// Create a contract updated at the given timestamp.
    pub fn new(payload: impl Into<String>, updated_at: u64) -> Self {
        Self {
            payload: payload.into(),
            updated_at,
        }
    }

    /// An empty contract, the state before any update.
    pub fn empty() -> Self {
        Self {
            payload: String::new(),
            updated_at: 0,
        }
    }

    /// True if no payload has ever been stored.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Elapsed seconds since this contract's own update.
    ///
    /// Non-negative by construction: a clock that reads earlier than the
    /// update timestamp saturates to zero.
    pub fn age(&self, now: u64) -> u64 {
        now.saturating_sub(self.updated_at)
    }
}

/// Input to a DPOR quorum synchronization. Not persisted beyond the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    /// Participant identifier binding the node to research-credit accounting.
    pub cpid: String,
    /// Quorum payload forwarded to the research-credit source.
    pub quorum_data: String,
}

impl SyncRequest {
    pub fn new(cpid: impl Into<String>, quorum_data: impl Into<String>) -> Self {
        Self {
            cpid: cpid.into(),
            quorum_data: quorum_data.into(),
        }
    }
}
