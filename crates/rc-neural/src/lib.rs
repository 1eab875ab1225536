//! Neural Consensus Gateway - DPOR fingerprint state and quorum synchronization.
//!
//! This crate owns the node's view of the externally computed research-credit
//! consensus data: the neural hash (fingerprint), the neural contract
//! (payload), and the machinery that refreshes them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     NEURAL GATEWAY (rc-neural)               │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌────────────────┐        ┌───────────────────────────┐     │
//! │  │  NeuralGateway │───────→│      ConsensusCache       │     │
//! │  │  (sync reads,  │ write  │  hash / contract / flag   │     │
//! │  │   overrides)   │ through│  (RwLock + AtomicBool)    │     │
//! │  └───────┬────────┘        └────────────▲──────────────┘     │
//! │          │                              │ atomic write       │
//! │          │                  ┌───────────┴──────────────┐     │
//! │          │                  │        QuorumSync        │     │
//! │          │                  │  (single-flight refresh) │     │
//! │          │                  └───────────┬──────────────┘     │
//! └──────────┼──────────────────────────────┼────────────────────┘
//!            │ ScoringBridge port           │ ResearchSource port
//!            ▼                              ▼
//!    external scoring engine        research-credit data source
//! ```
//!
//! The scoring engine is an opaque remote capability: the gateway forwards
//! requests and returns results without interpreting them. Likewise the
//! research-credit source returns already-reconciled hash/contract material;
//! the quorum reconciliation policy itself lives outside this node.
//!
//! # Usage
//!
//! ```ignore
//! use rc_neural::{ConsensusCache, NeuralConfig, NeuralGateway, QuorumSync, SyncRequest};
//!
//! let cache = Arc::new(ConsensusCache::new());
//! let gateway = NeuralGateway::new(config, Arc::clone(&cache), bridge);
//! let sync = QuorumSync::new(Arc::clone(&cache), source);
//!
//! let hash = gateway.neural_hash(false)?;
//! let accepted = sync.synchronize_dpor(SyncRequest::new("cpid", "quorum-data"));
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cache;
pub mod domain;
pub mod ports;
pub mod service;
pub mod sync;

// Re-exports for public API
pub use cache::ConsensusCache;
pub use domain::error::{NeuralError, NeuralResult};
pub use domain::types::{NeuralContract, NeuralHash, SyncRequest};
pub use ports::outbound::{ResearchSource, ScoringBridge, SystemTimeSource, TimeSource};
pub use service::{NeuralConfig, NeuralGateway};
pub use sync::QuorumSync;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
