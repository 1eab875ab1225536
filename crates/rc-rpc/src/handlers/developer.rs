//! Developer-category handlers: version reporting and quorum/tally
//! operations.
//!
//! The reconciliation of divergent hashes into one accepted value is an
//! external policy; these commands only trigger it or forward to the
//! scoring engine.

use crate::context::CommandContext;
use crate::domain::types::RpcRequest;
use crate::registry::HandlerFuture;
use rc_neural::SyncRequest;
use serde_json::{json, Value};
use std::sync::Arc;

/// `versionreport` - node, neural, and engine status in one place.
pub fn versionreport(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move {
        Ok(json!({
            "version": crate::VERSION,
            "neural_version": ctx.gateway.neural_version(),
            "neural_enabled": ctx.gateway.is_enabled(),
            "neural_status": ctx.gateway.is_neural_net().await,
        }))
    })
}

/// `tally` - trigger a research-credit tally for this node's CPID.
pub fn tally(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move {
        let accepted = ctx
            .quorum
            .synchronize_dpor(SyncRequest::new(ctx.cpid.clone(), "tally"));
        Ok(json!({ "accepted": accepted }))
    })
}

/// `tallyneural` - ask the scoring engine to re-tally magnitudes.
pub fn tallyneural(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move {
        let result = ctx.gateway.execute_generic_function("tallyneural", "").await?;
        Ok(json!({ "result": result }))
    })
}

/// `forcequorom` - force participation in the next quorum round.
///
/// Name retained from the historical command surface.
pub fn forcequorom(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move {
        let accepted = ctx
            .quorum
            .synchronize_dpor(SyncRequest::new(ctx.cpid.clone(), "forcequorom"));
        Ok(Value::Bool(accepted))
    })
}
