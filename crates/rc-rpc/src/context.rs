//! Handler context: shared services, node posture flags, and the narrow
//! ports through which out-of-scope collaborators are consumed.

use async_trait::async_trait;
use rc_neural::{NeuralGateway, QuorumSync};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Node posture flags shared between the dispatcher and the runtime.
#[derive(Default)]
pub struct NodeFlags {
    safe_mode: AtomicBool,
}

impl NodeFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the node is in the restricted safe-mode posture.
    pub fn safe_mode(&self) -> bool {
        self.safe_mode.load(Ordering::Acquire)
    }

    pub fn set_safe_mode(&self, on: bool) {
        self.safe_mode.store(on, Ordering::Release);
    }
}

/// Read-only view of the blockchain kept by the node's storage and P2P
/// subsystems. Those subsystems are external collaborators; handlers only
/// see this narrow surface.
#[async_trait]
pub trait ChainView: Send + Sync {
    /// Height of the best chain.
    async fn block_count(&self) -> u64;

    /// Hash of the best block.
    async fn best_block_hash(&self) -> String;

    /// Number of connected peers.
    async fn connection_count(&self) -> usize;

    /// Network-adjusted Unix time.
    async fn network_time(&self) -> u64;
}

/// Beacon registry collaborator: on-network announcements binding a CPID to
/// a node's signing identity.
#[async_trait]
pub trait BeaconPort: Send + Sync {
    /// Advertise a beacon for the given CPID. Returns the beacon identifier
    /// on success.
    async fn advertise(&self, cpid: &str) -> Result<String, String>;

    /// Report of currently known beacons.
    async fn report(&self) -> Value;
}

/// Wallet collaborator surface consumed by the wallet command stubs.
#[async_trait]
pub trait WalletView: Send + Sync {
    /// Total spendable balance.
    async fn balance(&self) -> f64;

    /// Back up the wallet to the given destination path.
    async fn backup(&self, destination: &str) -> Result<(), String>;
}

/// Everything a command handler may reach: consensus services, posture
/// flags, the node's own participant identity, and collaborator ports.
pub struct CommandContext {
    pub gateway: Arc<NeuralGateway>,
    pub quorum: Arc<QuorumSync>,
    pub flags: Arc<NodeFlags>,
    /// CPID binding this node to research-credit accounting.
    pub cpid: String,
    pub chain: Arc<dyn ChainView>,
    pub beacons: Arc<dyn BeaconPort>,
    pub wallet: Arc<dyn WalletView>,
}
