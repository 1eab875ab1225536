//! Standalone collaborator implementations.
//!
//! The chain, beacon, and wallet subsystems live outside this runtime. Until
//! they are attached, these placeholders keep the command surface honest:
//! reads answer with empty defaults and writes refuse explicitly.

use async_trait::async_trait;
use rc_rpc::{BeaconPort, ChainView, WalletView};
use serde_json::{json, Value};

/// Chain view with no chain attached.
#[derive(Default)]
pub struct StaticChainView;

#[async_trait]
impl ChainView for StaticChainView {
    async fn block_count(&self) -> u64 {
        0
    }

    async fn best_block_hash(&self) -> String {
        String::new()
    }

    async fn connection_count(&self) -> usize {
        0
    }

    async fn network_time(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Beacon registry with no network attached.
#[derive(Default)]
pub struct StaticBeaconPort;

#[async_trait]
impl BeaconPort for StaticBeaconPort {
    async fn advertise(&self, _cpid: &str) -> Result<String, String> {
        Err("beacon subsystem not attached".to_string())
    }

    async fn report(&self) -> Value {
        json!([])
    }
}

/// Wallet surface with no wallet attached.
#[derive(Default)]
pub struct StaticWalletView;

#[async_trait]
impl WalletView for StaticWalletView {
    async fn balance(&self) -> f64 {
        0.0
    }

    async fn backup(&self, _destination: &str) -> Result<(), String> {
        Err("wallet subsystem not attached".to_string())
    }
}
