//! Mining-category handlers: neural hash/contract queries, magnitude
//! queries, beacons, and DPOR synchronization.

use crate::context::CommandContext;
use crate::domain::error::RpcError;
use crate::domain::params::{check_named, check_positional, ParamKind};
use crate::domain::types::{RpcParams, RpcRequest};
use crate::registry::HandlerFuture;
use rc_neural::SyncRequest;
use serde_json::{json, Value};
use std::sync::Arc;

/// `currentneuralhash` - cached consensus fingerprint.
pub fn currentneuralhash(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move {
        let hash = ctx.gateway.neural_hash(false).await?;
        Ok(Value::String(hash))
    })
}

/// `neuralhash` - force a fresh synchronous computation of the fingerprint.
pub fn neuralhash(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move {
        let hash = ctx.gateway.neural_hash(true).await?;
        Ok(Value::String(hash))
    })
}

/// `currentneuralcontract` - cached research-credit payload.
pub fn currentneuralcontract(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move {
        let contract = ctx.gateway.neural_contract(false).await?;
        Ok(Value::String(contract))
    })
}

/// `syncdpor2` - trigger an asynchronous research-credit refresh.
///
/// Accepts optional positional `[cpid, quorum_data]` or a named object
/// `{cpid, quorum_data}` (both fields present, null falls back to the
/// node's own identity). The boolean result means accepted-and-started.
pub fn syncdpor2(ctx: Arc<CommandContext>, request: RpcRequest) -> HandlerFuture {
    Box::pin(async move {
        let (cpid, quorum_data) = match &request.params {
            RpcParams::Named(object) => {
                check_named(
                    object,
                    &[("cpid", ParamKind::String), ("quorum_data", ParamKind::String)],
                    true,
                )?;
                (
                    object
                        .get("cpid")
                        .and_then(Value::as_str)
                        .unwrap_or(&ctx.cpid)
                        .to_string(),
                    object
                        .get("quorum_data")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                )
            }
            RpcParams::Positional(params) => {
                check_positional(params, &[ParamKind::String, ParamKind::String], false)?;
                (
                    params
                        .first()
                        .and_then(Value::as_str)
                        .unwrap_or(&ctx.cpid)
                        .to_string(),
                    params
                        .get(1)
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                )
            }
        };

        let accepted = ctx.quorum.synchronize_dpor(SyncRequest::new(cpid, quorum_data));
        Ok(Value::Bool(accepted))
    })
}

/// `explainmagnitude` - ask the scoring engine to break down a CPID's
/// magnitude.
pub fn explainmagnitude(ctx: Arc<CommandContext>, request: RpcRequest) -> HandlerFuture {
    Box::pin(async move {
        let params = request.params.positional()?;
        check_positional(params, &[ParamKind::String], false)?;
        let cpid = params
            .first()
            .and_then(Value::as_str)
            .unwrap_or(&ctx.cpid);

        let magnitude = ctx.gateway.execute_generic_function("explainmag", cpid).await?;
        Ok(json!({ "cpid": cpid, "magnitude": magnitude }))
    })
}

/// `superblockage` - age of the cached contract and whether it is within
/// the acceptance window.
pub fn superblockage(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move {
        Ok(json!({
            "age": ctx.gateway.contract_age(),
            "within_bounds": ctx.gateway.contract_age_within_bounds(),
        }))
    })
}

/// `advertisebeacon` - announce a binding between a CPID and this node's
/// signing identity.
pub fn advertisebeacon(ctx: Arc<CommandContext>, request: RpcRequest) -> HandlerFuture {
    Box::pin(async move {
        let params = request.params.positional()?;
        check_positional(params, &[ParamKind::String], false)?;
        let cpid = params
            .first()
            .and_then(Value::as_str)
            .unwrap_or(&ctx.cpid)
            .to_string();

        match ctx.beacons.advertise(&cpid).await {
            Ok(beacon_id) => Ok(json!({ "cpid": cpid, "beacon": beacon_id })),
            Err(e) => Err(RpcError::misc(format!("Beacon advertisement failed: {e}"))),
        }
    })
}

/// `beaconreport` - currently known beacons.
pub fn beaconreport(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move { Ok(ctx.beacons.report().await) })
}
