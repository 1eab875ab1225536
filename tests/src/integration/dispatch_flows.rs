//! # Dispatch Flow Tests
//!
//! The per-request pipeline end to end: lookup, the help short-circuit,
//! type checking, safe-mode gating, and error shapes on the wire.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use rc_neural::{
        ConsensusCache, NeuralConfig, NeuralGateway, NeuralResult, QuorumSync, ResearchSource,
        ScoringBridge,
    };
    use rc_rpc::{
        build_command_table, codes, BeaconPort, ChainView, CommandContext, CommandDispatcher,
        NodeFlags, RpcParams, RpcRequest, WalletView,
    };

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    struct NullBridge;

    #[async_trait]
    impl ScoringBridge for NullBridge {
        async fn compute_hash(&self) -> NeuralResult<String> {
            Ok("h".into())
        }
        async fn compute_contract(&self) -> NeuralResult<String> {
            Ok("c".into())
        }
        async fn execute(&self, _function: &str, _data: &str) -> NeuralResult<f64> {
            Ok(0.0)
        }
        async fn probe(&self) -> i64 {
            1
        }
    }

    struct NullSource;

    #[async_trait]
    impl ResearchSource for NullSource {
        async fn fetch(&self, _cpid: &str, _quorum_data: &str) -> NeuralResult<(String, String)> {
            Ok(("h".into(), "c".into()))
        }
    }

    struct FixedChain;

    #[async_trait]
    impl ChainView for FixedChain {
        async fn block_count(&self) -> u64 {
            42
        }
        async fn best_block_hash(&self) -> String {
            "00ff".into()
        }
        async fn connection_count(&self) -> usize {
            3
        }
        async fn network_time(&self) -> u64 {
            1_700_000_000
        }
    }

    /// Beacon double counting advertisements, to prove gating and the help
    /// short-circuit never reach the handler.
    struct CountingBeacons {
        advertised: AtomicUsize,
    }

    #[async_trait]
    impl BeaconPort for CountingBeacons {
        async fn advertise(&self, cpid: &str) -> Result<String, String> {
            self.advertised.fetch_add(1, Ordering::SeqCst);
            Ok(format!("beacon-{cpid}"))
        }
        async fn report(&self) -> Value {
            json!([{ "cpid": "researcher01" }])
        }
    }

    struct CountingWallet {
        backups: AtomicUsize,
    }

    #[async_trait]
    impl WalletView for CountingWallet {
        async fn balance(&self) -> f64 {
            7.75
        }
        async fn backup(&self, _destination: &str) -> Result<(), String> {
            self.backups.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Stack {
        dispatcher: CommandDispatcher,
        flags: Arc<NodeFlags>,
        beacons: Arc<CountingBeacons>,
        wallet: Arc<CountingWallet>,
    }

    fn stack() -> Stack {
        let cache = Arc::new(ConsensusCache::new());
        let gateway = Arc::new(NeuralGateway::new(
            NeuralConfig::default(),
            Arc::clone(&cache),
            Arc::new(NullBridge),
        ));
        let quorum = Arc::new(QuorumSync::new(cache, Arc::new(NullSource)));
        let flags = Arc::new(NodeFlags::new());
        let beacons = Arc::new(CountingBeacons {
            advertised: AtomicUsize::new(0),
        });
        let wallet = Arc::new(CountingWallet {
            backups: AtomicUsize::new(0),
        });

        let ctx = Arc::new(CommandContext {
            gateway,
            quorum,
            flags: Arc::clone(&flags),
            cpid: "researcher01".into(),
            chain: Arc::new(FixedChain),
            beacons: Arc::clone(&beacons) as Arc<dyn BeaconPort>,
            wallet: Arc::clone(&wallet) as Arc<dyn WalletView>,
        });

        let table = Arc::new(build_command_table().unwrap());
        Stack {
            dispatcher: CommandDispatcher::new(table, ctx),
            flags,
            beacons,
            wallet,
        }
    }

    // =========================================================================
    // LOOKUP AND ERROR SHAPES
    // =========================================================================

    #[tokio::test]
    async fn test_unknown_command_error_shape() {
        let s = stack();
        let err = s
            .dispatcher
            .dispatch(RpcRequest::new("unknowncmd", RpcParams::none()))
            .await
            .unwrap_err();
        assert_eq!(err.code, codes::METHOD_NOT_FOUND);
        assert_eq!(err.message, "Method not found");
    }

    /// Lookup is exact: no case folding, no prefix matching.
    #[tokio::test]
    async fn test_lookup_is_exact_match_only() {
        let s = stack();
        for name in ["Tally", "TALLY", "tall", "tallyx"] {
            let err = s
                .dispatcher
                .dispatch(RpcRequest::new(name, RpcParams::none()))
                .await
                .unwrap_err();
            assert_eq!(err.code, codes::METHOD_NOT_FOUND, "{name}");
        }
    }

    #[tokio::test]
    async fn test_wire_response_carries_result_or_error_never_both() {
        let s = stack();

        let ok = s
            .dispatcher
            .dispatch_request(RpcRequest::new("getblockcount", RpcParams::none()))
            .await;
        assert_eq!(ok.result, Some(json!(42)));
        assert!(ok.error.is_none());

        let err = s
            .dispatcher
            .dispatch_request(RpcRequest::new("unknowncmd", RpcParams::none()))
            .await;
        assert!(err.result.is_none());
        assert!(err.error.is_some());
    }

    // =========================================================================
    // TYPE CHECKING
    // =========================================================================

    /// The first mismatching positional parameter is named in the error.
    #[tokio::test]
    async fn test_positional_type_mismatch() {
        let s = stack();
        let err = s
            .dispatcher
            .dispatch(RpcRequest::new(
                "backupwallet",
                RpcParams::Positional(vec![json!(5)]),
            ))
            .await
            .unwrap_err();
        assert_eq!(err.code, codes::INVALID_PARAMS);
        assert!(err.message.contains("String"));
        assert!(err.message.contains("parameter 0"));
        assert_eq!(s.wallet.backups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_named_params_rejected_where_positional_expected() {
        let s = stack();
        let mut named = serde_json::Map::new();
        named.insert("destination".into(), json!("/tmp/w.bak"));
        let err = s
            .dispatcher
            .dispatch(RpcRequest::new("backupwallet", RpcParams::Named(named)))
            .await
            .unwrap_err();
        assert_eq!(err.code, codes::INVALID_PARAMS);
    }

    // =========================================================================
    // SAFE-MODE GATING
    // =========================================================================

    /// An ineligible command is refused before its handler runs; clearing
    /// safe mode immediately restores it, with no restart or rebuild.
    #[tokio::test]
    async fn test_safe_mode_gate_and_recovery() {
        let s = stack();
        s.flags.set_safe_mode(true);

        let request = RpcRequest::new(
            "advertisebeacon",
            RpcParams::Positional(vec![json!("researcher01")]),
        );
        let err = s.dispatcher.dispatch(request.clone()).await.unwrap_err();
        assert_eq!(err.code, codes::FORBIDDEN_BY_SAFE_MODE);
        assert!(err.message.contains("advertisebeacon"));
        assert_eq!(s.beacons.advertised.load(Ordering::SeqCst), 0);

        // Read-only commands still work under safe mode.
        let balance = s
            .dispatcher
            .dispatch(RpcRequest::new("getbalance", RpcParams::none()))
            .await
            .unwrap();
        assert_eq!(balance, json!(7.75));

        s.flags.set_safe_mode(false);
        let value = s.dispatcher.dispatch(request).await.unwrap();
        assert_eq!(value["beacon"], json!("beacon-researcher01"));
        assert_eq!(s.beacons.advertised.load(Ordering::SeqCst), 1);
    }

    // =========================================================================
    // HELP SHORT-CIRCUIT
    // =========================================================================

    /// The help flag returns usage text without executing anything, even for
    /// commands that would be blocked by safe mode.
    #[tokio::test]
    async fn test_help_flag_bypasses_execution_and_gating() {
        let s = stack();
        s.flags.set_safe_mode(true);

        let usage = s
            .dispatcher
            .dispatch(RpcRequest::help_for("advertisebeacon"))
            .await
            .unwrap();
        assert!(usage.as_str().unwrap().starts_with("advertisebeacon"));
        assert_eq!(s.beacons.advertised.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_help_flag_for_unknown_command_is_not_found() {
        let s = stack();
        let err = s
            .dispatcher
            .dispatch(RpcRequest::help_for("unknowncmd"))
            .await
            .unwrap_err();
        assert_eq!(err.code, codes::METHOD_NOT_FOUND);
    }

    // =========================================================================
    // DEPRECATED SURFACE
    // =========================================================================

    #[tokio::test]
    async fn test_deprecated_commands_answer_with_misc_error() {
        let s = stack();
        for name in ["listitem", "execute"] {
            let err = s
                .dispatcher
                .dispatch(RpcRequest::new(name, RpcParams::none()))
                .await
                .unwrap_err();
            assert_eq!(err.code, codes::MISC_ERROR, "{name}");
        }
    }
}
