//! Deprecated command stubs kept for callers of the historical surface.

use crate::context::CommandContext;
use crate::domain::error::RpcError;
use crate::domain::types::RpcRequest;
use crate::registry::HandlerFuture;
use std::sync::Arc;

/// `listitem` - replaced by the per-category report commands.
pub fn listitem(_ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async {
        Err(RpcError::misc(
            "listitem is deprecated; use beaconreport or superblockage",
        ))
    })
}

/// `execute` - replaced by direct command dispatch.
pub fn execute(_ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async {
        Err(RpcError::misc(
            "execute is deprecated; invoke the target command directly",
        ))
    })
}
