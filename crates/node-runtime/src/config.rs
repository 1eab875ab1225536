//! # Node Configuration
//!
//! Unified configuration for the consensus gateway, the RPC surface, and
//! the external-capability endpoints, with environment overrides.

use rc_neural::NeuralConfig;

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Neural gateway configuration.
    pub neural: NeuralConfig,
    /// RPC surface configuration.
    pub rpc: RpcSettings,
    /// External capability endpoints.
    pub endpoints: EndpointSettings,
    /// CPID binding this node to research-credit accounting. Empty when the
    /// node does not participate.
    pub cpid: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            neural: NeuralConfig::default(),
            rpc: RpcSettings::default(),
            endpoints: EndpointSettings::default(),
            cpid: String::new(),
        }
    }
}

/// RPC surface configuration.
#[derive(Debug, Clone)]
pub struct RpcSettings {
    /// Listening port for the line-oriented local transport.
    pub port: u16,
    /// Start in the restricted safe-mode posture.
    pub safe_mode: bool,
}

impl Default for RpcSettings {
    fn default() -> Self {
        Self {
            port: 32749,
            safe_mode: false,
        }
    }
}

/// Addresses of the external capabilities.
#[derive(Debug, Clone)]
pub struct EndpointSettings {
    /// Scoring engine bridge address.
    pub bridge_addr: String,
    /// Research-credit data source address.
    pub source_addr: String,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            bridge_addr: "127.0.0.1:32750".to_string(),
            source_addr: "127.0.0.1:32751".to_string(),
        }
    }
}

/// Load configuration from defaults and environment overrides.
pub fn load_config() -> NodeConfig {
    let mut config = NodeConfig::default();

    if let Ok(port) = std::env::var("RC_RPC_PORT") {
        if let Ok(p) = port.parse() {
            config.rpc.port = p;
        }
    }
    if let Ok(enabled) = std::env::var("RC_NEURAL_ENABLED") {
        config.neural.enabled = enabled != "0" && !enabled.eq_ignore_ascii_case("false");
    }
    if let Ok(age) = std::env::var("RC_CONTRACT_MAX_AGE_SECS") {
        if let Ok(secs) = age.parse() {
            config.neural.contract_max_age_secs = secs;
        }
    }
    if let Ok(safe) = std::env::var("RC_SAFE_MODE") {
        config.rpc.safe_mode = safe == "1" || safe.eq_ignore_ascii_case("true");
    }
    if let Ok(addr) = std::env::var("RC_BRIDGE_ADDR") {
        config.endpoints.bridge_addr = addr;
    }
    if let Ok(addr) = std::env::var("RC_SOURCE_ADDR") {
        config.endpoints.source_addr = addr;
    }
    if let Ok(cpid) = std::env::var("RC_CPID") {
        config.cpid = cpid;
    }

    config
}
