//! Command dispatcher - the per-request pipeline.
//!
//! `Received → Lookup → (TypeCheck by handler) → SafeModeGate → Execute`.
//! Whatever happens inside a handler, the caller receives a well-formed
//! result or a well-formed [`RpcError`]; a single request's failure never
//! takes the dispatcher down.

use crate::context::CommandContext;
use crate::domain::error::RpcError;
use crate::domain::types::{RpcRequest, RpcResponse};
use crate::registry::CommandTable;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Routes requests to registered handlers, enforcing the safe-mode gate.
pub struct CommandDispatcher {
    table: Arc<CommandTable>,
    ctx: Arc<CommandContext>,
}

impl CommandDispatcher {
    pub fn new(table: Arc<CommandTable>, ctx: Arc<CommandContext>) -> Self {
        Self { table, ctx }
    }

    /// Registered command table.
    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Execute one request, returning the raw result or error.
    pub async fn dispatch(&self, request: RpcRequest) -> Result<Value, RpcError> {
        let descriptor = self
            .table
            .lookup(&request.command)
            .ok_or_else(RpcError::method_not_found)?;

        // Usage text comes straight from the descriptor so a help request
        // can never reach the handler or cause side effects.
        if request.help {
            return Ok(Value::String(descriptor.usage.to_string()));
        }

        if self.ctx.flags.safe_mode() && !descriptor.safe_mode_ok {
            warn!(command = %request.command, "Refused under safe mode");
            return Err(RpcError::forbidden_by_safe_mode(&request.command));
        }

        debug!(command = %request.command, params = request.params.len(), "Executing command");

        let command = request.command.clone();
        let future = (descriptor.handler)(Arc::clone(&self.ctx), request);

        // Handlers run on their own task so a panic is contained and
        // normalized instead of unwinding through the transport.
        match tokio::spawn(future).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                debug!(command = %command, code = e.code, "Command returned error");
                Err(e)
            }
            Err(join_error) => {
                error!(command = %command, error = %join_error, "Handler aborted");
                Err(RpcError::internal(format!("command '{command}' aborted")))
            }
        }
    }

    /// Execute one request and wrap the outcome in the wire response shape.
    pub async fn dispatch_request(&self, request: RpcRequest) -> RpcResponse {
        self.dispatch(request).await.into()
    }
}
