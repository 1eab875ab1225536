//! # Consensus Flow Tests
//!
//! Full-stack flows across rc-neural and rc-rpc: cached reads through the
//! dispatcher, asynchronous quorum refresh with the single-flight guarantee,
//! and the disabled-gateway posture.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use rc_neural::{
        ConsensusCache, NeuralConfig, NeuralError, NeuralGateway, NeuralResult, QuorumSync,
        ResearchSource, ScoringBridge,
    };
    use rc_rpc::{
        build_command_table, codes, BeaconPort, ChainView, CommandContext, CommandDispatcher,
        NodeFlags, RpcParams, RpcRequest, WalletView,
    };

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// Scoring-engine double that counts compute calls.
    struct CountingBridge {
        computes: AtomicUsize,
    }

    impl CountingBridge {
        fn new() -> Self {
            Self {
                computes: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ScoringBridge for CountingBridge {
        async fn compute_hash(&self) -> NeuralResult<String> {
            self.computes.fetch_add(1, Ordering::SeqCst);
            Ok("bridge-hash".into())
        }

        async fn compute_contract(&self) -> NeuralResult<String> {
            self.computes.fetch_add(1, Ordering::SeqCst);
            Ok("bridge-contract".into())
        }

        async fn execute(&self, _function: &str, _data: &str) -> NeuralResult<f64> {
            Ok(10.0)
        }

        async fn probe(&self) -> i64 {
            1
        }
    }

    /// Research-credit source gated on a semaphore, so tests control when a
    /// refresh completes.
    struct GatedSource {
        started: AtomicUsize,
        gate: tokio::sync::Semaphore,
        fail: bool,
    }

    impl GatedSource {
        fn new(fail: bool) -> Self {
            Self {
                started: AtomicUsize::new(0),
                gate: tokio::sync::Semaphore::new(0),
                fail,
            }
        }

        fn release(&self) {
            self.gate.add_permits(1);
        }
    }

    #[async_trait]
    impl ResearchSource for GatedSource {
        async fn fetch(&self, cpid: &str, _quorum_data: &str) -> NeuralResult<(String, String)> {
            self.started.fetch_add(1, Ordering::SeqCst);
            let _permit = self
                .gate
                .acquire()
                .await
                .map_err(|_| NeuralError::SourceUnavailable("gate closed".into()))?;
            if self.fail {
                return Err(NeuralError::SourceUnavailable("stats host down".into()));
            }
            Ok((format!("synced-hash-{cpid}"), format!("synced-contract-{cpid}")))
        }
    }

    struct NullChain;

    #[async_trait]
    impl ChainView for NullChain {
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
            0
        }
    }

    struct NullBeacons;

    #[async_trait]
    impl BeaconPort for NullBeacons {
        async fn advertise(&self, cpid: &str) -> Result<String, String> {
            Ok(format!("beacon-{cpid}"))
        }
        async fn report(&self) -> Value {
            json!([])
        }
    }

    struct NullWallet;

    #[async_trait]
    impl WalletView for NullWallet {
        async fn balance(&self) -> f64 {
            0.0
        }
        async fn backup(&self, _destination: &str) -> Result<(), String> {
            Ok(())
        }
    }

    struct Stack {
        dispatcher: CommandDispatcher,
        quorum: Arc<QuorumSync>,
        cache: Arc<ConsensusCache>,
        bridge: Arc<CountingBridge>,
        source: Arc<GatedSource>,
    }

    fn stack(enabled: bool, failing_source: bool) -> Stack {
        let cache = Arc::new(ConsensusCache::new());
        let bridge = Arc::new(CountingBridge::new());
        let source = Arc::new(GatedSource::new(failing_source));

        let config = NeuralConfig {
            enabled,
            ..NeuralConfig::default()
        };
        let gateway = Arc::new(NeuralGateway::new(
            config,
            Arc::clone(&cache),
            Arc::clone(&bridge) as Arc<dyn ScoringBridge>,
        ));
        let quorum = Arc::new(QuorumSync::new(
            Arc::clone(&cache),
            Arc::clone(&source) as Arc<dyn ResearchSource>,
        ));

        let ctx = Arc::new(CommandContext {
            gateway,
            quorum: Arc::clone(&quorum),
            flags: Arc::new(NodeFlags::new()),
            cpid: "researcher01".into(),
            chain: Arc::new(NullChain),
            beacons: Arc::new(NullBeacons),
            wallet: Arc::new(NullWallet),
        });

        let table = Arc::new(build_command_table().unwrap());
        Stack {
            dispatcher: CommandDispatcher::new(table, ctx),
            quorum,
            cache,
            bridge,
            source,
        }
    }

    fn request(command: &str) -> RpcRequest {
        RpcRequest::new(command, RpcParams::none())
    }

    // =========================================================================
    // CACHED READS
    // =========================================================================

    /// Repeated cached reads return identical values and never touch the
    /// scoring engine.
    #[tokio::test]
    async fn test_cached_reads_are_idempotent_and_bridge_free() {
        let s = stack(true, false);

        let first = s.dispatcher.dispatch(request("currentneuralhash")).await.unwrap();
        let second = s.dispatcher.dispatch(request("currentneuralhash")).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(s.bridge.computes.load(Ordering::SeqCst), 0);
    }

    /// A forced recomputation hits the bridge once and later cached reads
    /// observe the written-through value.
    #[tokio::test]
    async fn test_forced_recompute_writes_through() {
        let s = stack(true, false);

        let fresh = s.dispatcher.dispatch(request("neuralhash")).await.unwrap();
        assert_eq!(fresh, json!("bridge-hash"));
        assert_eq!(s.bridge.computes.load(Ordering::SeqCst), 1);

        let cached = s.dispatcher.dispatch(request("currentneuralhash")).await.unwrap();
        assert_eq!(cached, json!("bridge-hash"));
        assert_eq!(s.bridge.computes.load(Ordering::SeqCst), 1);
    }

    // =========================================================================
    // QUORUM SYNCHRONIZATION
    // =========================================================================

    /// While one refresh is in flight, a second request is rejected without
    /// starting a second fetch; after completion the cache holds the synced
    /// pair.
    #[tokio::test]
    async fn test_single_flight_refresh_through_dispatcher() {
        let s = stack(true, false);

        let accepted = s.dispatcher.dispatch(request("syncdpor2")).await.unwrap();
        assert_eq!(accepted, json!(true));

        let rejected = s.dispatcher.dispatch(request("syncdpor2")).await.unwrap();
        assert_eq!(rejected, json!(false));
        assert_eq!(s.source.started.load(Ordering::SeqCst), 1);

        s.source.release();
        s.quorum.wait_idle().await;

        let hash = s.dispatcher.dispatch(request("currentneuralhash")).await.unwrap();
        assert_eq!(hash, json!("synced-hash-researcher01"));
        let contract = s
            .dispatcher
            .dispatch(request("currentneuralcontract"))
            .await
            .unwrap();
        assert_eq!(contract, json!("synced-contract-researcher01"));
    }

    /// A failed refresh leaves the previously synced values in place and
    /// frees the slot for a retry.
    #[tokio::test]
    async fn test_failed_refresh_preserves_cache_and_slot() {
        let s = stack(true, true);
        s.cache.store_hash(rc_neural::NeuralHash::new("prior", 1));

        assert_eq!(
            s.dispatcher.dispatch(request("syncdpor2")).await.unwrap(),
            json!(true)
        );
        s.source.release();
        s.quorum.wait_idle().await;

        let hash = s.dispatcher.dispatch(request("currentneuralhash")).await.unwrap();
        assert_eq!(hash, json!("prior"));

        // Slot released: the next attempt is accepted again.
        assert_eq!(
            s.dispatcher.dispatch(request("syncdpor2")).await.unwrap(),
            json!(true)
        );
        s.source.release();
        s.quorum.wait_idle().await;
    }

    /// `tally` and `forcequorom` drive the same single-flight refresh.
    #[tokio::test]
    async fn test_tally_and_forcequorom_share_the_flight_slot() {
        let s = stack(true, false);

        let tally = s.dispatcher.dispatch(request("tally")).await.unwrap();
        assert_eq!(tally, json!({ "accepted": true }));

        let forced = s.dispatcher.dispatch(request("forcequorom")).await.unwrap();
        assert_eq!(forced, json!(false));

        s.source.release();
        s.quorum.wait_idle().await;
    }

    // =========================================================================
    // DISABLED POSTURE
    // =========================================================================

    /// With the neural network disabled the version carries no magic suffix,
    /// consensus queries fail with the dedicated error code, and the probe
    /// reports unavailable.
    #[tokio::test]
    async fn test_disabled_gateway_posture() {
        let s = stack(false, false);

        let report = s.dispatcher.dispatch(request("versionreport")).await.unwrap();
        assert_eq!(report["neural_enabled"], json!(false));
        assert_eq!(report["neural_status"], json!(0));
        assert!(!report["neural_version"].as_str().unwrap().ends_with("1999"));

        let err = s
            .dispatcher
            .dispatch(request("currentneuralhash"))
            .await
            .unwrap_err();
        assert_eq!(err.code, codes::NEURAL_UNAVAILABLE);
    }

    /// With the neural network enabled the version string carries the magic
    /// suffix.
    #[tokio::test]
    async fn test_enabled_gateway_version_suffix() {
        let s = stack(true, false);
        let report = s.dispatcher.dispatch(request("versionreport")).await.unwrap();
        assert!(report["neural_version"].as_str().unwrap().ends_with("1999"));
    }
}
