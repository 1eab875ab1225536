//! Network-category handlers: chain and peer introspection through the
//! ChainView collaborator port.

use crate::context::CommandContext;
use crate::domain::types::RpcRequest;
use crate::registry::HandlerFuture;
use serde_json::{json, Value};
use std::sync::Arc;

/// `getblockcount` - height of the best chain.
pub fn getblockcount(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move { Ok(json!(ctx.chain.block_count().await)) })
}

/// `getbestblockhash` - hash of the best block.
pub fn getbestblockhash(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move { Ok(Value::String(ctx.chain.best_block_hash().await)) })
}

/// `getconnectioncount` - number of connected peers.
pub fn getconnectioncount(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move { Ok(json!(ctx.chain.connection_count().await)) })
}

/// `networktime` - network-adjusted Unix time.
pub fn networktime(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move { Ok(json!(ctx.chain.network_time().await)) })
}
