//! # ResearchChain Node Runtime
//!
//! The main entry point for the ResearchChain DPOR node.
//!
//! ## Modular Structure
//!
//! - `config` - Node configuration with environment overrides
//! - `adapters` - Port implementations connecting external capabilities
//! - `server` - Line-oriented local RPC transport
//! - `cli` - Single-shot command mode
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults + environment)
//! 2. Build the consensus cache, gateway, and quorum synchronizer
//! 3. Build the command table (duplicate registration is fatal)
//! 4. Either execute one command-line request, or serve the local
//!    transport until Ctrl+C

pub mod adapters;
pub mod cli;
pub mod config;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rc_neural::{ConsensusCache, NeuralGateway, QuorumSync};
use rc_rpc::{build_command_table, CommandContext, CommandDispatcher, NodeFlags};

use crate::adapters::{
    ProcessResearchSource, ProcessScoringBridge, StaticBeaconPort, StaticChainView,
    StaticWalletView,
};
use crate::config::NodeConfig;
use crate::server::RpcServer;

/// Wire the consensus services and command surface from configuration.
fn build_dispatcher(config: &NodeConfig) -> Result<(Arc<CommandDispatcher>, Arc<ConsensusCache>)> {
    let cache = Arc::new(ConsensusCache::new());

    let bridge = Arc::new(ProcessScoringBridge::new(
        config.endpoints.bridge_addr.clone(),
    ));
    let gateway = Arc::new(NeuralGateway::new(
        config.neural.clone(),
        Arc::clone(&cache),
        bridge,
    ));

    let source = Arc::new(ProcessResearchSource::new(
        config.endpoints.source_addr.clone(),
    ));
    let quorum = Arc::new(QuorumSync::new(Arc::clone(&cache), source));

    let flags = Arc::new(NodeFlags::new());
    flags.set_safe_mode(config.rpc.safe_mode);

    let ctx = Arc::new(CommandContext {
        gateway,
        quorum,
        flags,
        cpid: config.cpid.clone(),
        chain: Arc::new(StaticChainView),
        beacons: Arc::new(StaticBeaconPort),
        wallet: Arc::new(StaticWalletView),
    });

    let table = Arc::new(build_command_table().context("Failed to build the command table")?);
    Ok((Arc::new(CommandDispatcher::new(table, ctx)), cache))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = config::load_config();
    let (dispatcher, cache) = build_dispatcher(&config)?;

    // Arguments present: execute one command and exit.
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        let code = cli::run_single_shot(dispatcher, args).await;
        std::process::exit(code);
    }

    info!("===========================================");
    info!("  ResearchChain Node Runtime v{}", rc_rpc::VERSION);
    info!("===========================================");
    info!("Neural enabled: {}", config.neural.enabled);
    info!("Safe mode: {}", config.rpc.safe_mode);
    info!("RPC port: {}", config.rpc.port);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.rpc.port))
        .await
        .with_context(|| format!("Failed to bind RPC port {}", config.rpc.port))?;
    let server = RpcServer::new(dispatcher);

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::select! {
        _ = server.serve(listener) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    // Cached consensus data is not durable across restarts.
    cache.clear();
    info!("Shutdown complete");

    Ok(())
}
