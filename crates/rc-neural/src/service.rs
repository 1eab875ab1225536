//! Neural gateway service - synchronous query API over the consensus cache
//! and the numeric bridge to the external scoring engine.

use crate::cache::ConsensusCache;
use crate::domain::error::{NeuralError, NeuralResult};
use crate::domain::types::{NeuralContract, NeuralHash};
use crate::ports::outbound::{ScoringBridge, SystemTimeSource, TimeSource};
use std::sync::Arc;
use tracing::debug;

/// Version suffix appended when neural-network features are enabled.
const NEURAL_VERSION_SUFFIX: &str = "1999";

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct NeuralConfig {
    /// Whether neural-network features are active for this
    /// build/configuration. Gateway operations other than the enabled check
    /// and the version string fail when false.
    pub enabled: bool,
    /// Base application version string.
    pub base_version: String,
    /// Acceptance window for cached contract age, in seconds.
    pub contract_max_age_secs: u64,
}

impl Default for NeuralConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_version: crate::VERSION.to_string(),
            contract_max_age_secs: 14_400, // 4 hours
        }
    }
}

/// Synchronous query API for the node's consensus view.
///
/// Reads come from the [`ConsensusCache`]; override reads block on the
/// scoring bridge and write the fresh value through to the cache.
pub struct NeuralGateway {
    config: NeuralConfig,
    cache: Arc<ConsensusCache>,
    bridge: Arc<dyn ScoringBridge>,
    time_source: Box<dyn TimeSource>,
}

impl NeuralGateway {
    pub fn new(
        config: NeuralConfig,
        cache: Arc<ConsensusCache>,
        bridge: Arc<dyn ScoringBridge>,
    ) -> Self {
        Self {
            config,
            cache,
            bridge,
            time_source: Box::new(SystemTimeSource),
        }
    }

    /// Set custom time source (for testing)
    pub fn with_time_source(mut self, time_source: Box<dyn TimeSource>) -> Self {
        self.time_source = time_source;
        self
    }

    /// Whether neural-network features are active.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Application version with the neural magic suffix appended only when
    /// the neural network is enabled.
    pub fn neural_version(&self) -> String {
        if self.config.enabled {
            format!("{}{}", self.config.base_version, NEURAL_VERSION_SUFFIX)
        } else {
            self.config.base_version.clone()
        }
    }

    /// Current neural hash.
    ///
    /// Returns the cached fingerprint, which is empty if none has ever been
    /// computed. With `force_refresh` the scoring bridge is queried
    /// synchronously and the result written through to the cache before
    /// returning.
    pub async fn neural_hash(&self, force_refresh: bool) -> NeuralResult<String> {
        self.ensure_enabled()?;

        if force_refresh {
            let fingerprint = self.bridge.compute_hash().await?;
            let now = self.time_source.now();
            debug!(computed_at = now, "Refreshed neural hash from scoring bridge");
            self.cache.store_hash(NeuralHash::new(fingerprint.clone(), now));
            return Ok(fingerprint);
        }

        Ok(self.cache.hash().fingerprint)
    }

    /// Most recently updated neural contract.
    ///
    /// Same caching contract as [`neural_hash`](Self::neural_hash).
    pub async fn neural_contract(&self, force_refresh: bool) -> NeuralResult<String> {
        self.ensure_enabled()?;

        if force_refresh {
            let payload = self.bridge.compute_contract().await?;
            let now = self.time_source.now();
            debug!(updated_at = now, "Refreshed neural contract from scoring bridge");
            self.cache
                .store_contract(NeuralContract::new(payload.clone(), now));
            return Ok(payload);
        }

        Ok(self.cache.contract().payload)
    }

    /// Forward an opaque function call to the scoring engine and return its
    /// numeric result. The gateway does not interpret `function` or `data`.
    pub async fn execute_generic_function(&self, function: &str, data: &str) -> NeuralResult<f64> {
        self.ensure_enabled()?;
        self.bridge.execute(function, data).await
    }

    /// Live availability probe of the scoring engine, distinct from the
    /// static enabled flag. Returns 0 when disabled or unreachable.
    pub async fn is_neural_net(&self) -> i64 {
        if !self.config.enabled {
            return 0;
        }
        self.bridge.probe().await
    }

    /// Elapsed seconds since the cached contract's own update.
    pub fn contract_age(&self) -> u64 {
        self.cache.contract_age(self.time_source.now())
    }

    /// Whether the cached contract is young enough to be trusted without a
    /// resynchronization.
    pub fn contract_age_within_bounds(&self) -> bool {
        self.contract_age() <= self.config.contract_max_age_secs
    }

    fn ensure_enabled(&self) -> NeuralResult<()> {
        if self.config.enabled {
            Ok(())
        } else {
            Err(NeuralError::Disabled)
        }
    }
}
