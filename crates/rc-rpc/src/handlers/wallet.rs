//! Wallet-category handlers. Key and transaction management live in the
//! wallet subsystem; these commands only cross its narrow view port.

use crate::context::CommandContext;
use crate::domain::error::RpcError;
use crate::domain::params::{check_positional, ParamKind};
use crate::domain::types::RpcRequest;
use crate::registry::HandlerFuture;
use serde_json::{json, Value};
use std::sync::Arc;

/// `getbalance` - total spendable balance.
pub fn getbalance(ctx: Arc<CommandContext>, _request: RpcRequest) -> HandlerFuture {
    Box::pin(async move { Ok(json!(ctx.wallet.balance().await)) })
}

/// `backupwallet <destination>` - back up the wallet file.
pub fn backupwallet(ctx: Arc<CommandContext>, request: RpcRequest) -> HandlerFuture {
    Box::pin(async move {
        let params = request.params.positional()?;
        check_positional(params, &[ParamKind::String], false)?;
        let destination = request.params.string_at(0)?;

        ctx.wallet
            .backup(destination)
            .await
            .map_err(|e| RpcError::wallet(format!("Wallet backup failed: {e}")))?;
        Ok(Value::Bool(true))
    })
}
