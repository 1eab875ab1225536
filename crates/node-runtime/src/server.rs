//! Line-oriented local RPC transport.
//!
//! One JSON request per line in, one JSON response per line out. The `help`
//! command is answered here from the command table rather than from a
//! registered handler, so the table never has to reference itself.

use rc_rpc::{
    CommandCategory, CommandDispatcher, HelpFormatter, RpcError, RpcParams, RpcRequest,
    RpcResponse,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

/// Usage line for the `help` pseudo-command, which lives outside the table.
const HELP_USAGE: &str = "help [category|command] - usage text for the command surface";

/// Render help text for an optional category or command argument.
pub fn render_help(
    dispatcher: &CommandDispatcher,
    params: &RpcParams,
) -> Result<Value, RpcError> {
    let formatter = HelpFormatter::new(dispatcher.table());
    let topic = match params.get(0) {
        None => return Ok(Value::String(formatter.all())),
        Some(value) => value
            .as_str()
            .ok_or_else(|| RpcError::bad_positional(0, "String"))?,
    };

    if let Some(category) = CommandCategory::parse(topic) {
        return Ok(Value::String(formatter.category(category)));
    }
    if let Some(descriptor) = dispatcher.table().lookup(topic) {
        return Ok(Value::String(descriptor.usage.to_string()));
    }
    Err(RpcError::invalid_params(format!(
        "Unknown help topic: {topic}"
    )))
}

/// Serves the dispatcher over a local TCP listener.
pub struct RpcServer {
    dispatcher: Arc<CommandDispatcher>,
}

impl RpcServer {
    pub fn new(dispatcher: Arc<CommandDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Accept connections until the listener is dropped by shutdown.
    pub async fn serve(&self, listener: TcpListener) {
        info!(addr = ?listener.local_addr().ok(), "RPC transport listening");
        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    debug!(%peer, "RPC connection accepted");
                    let dispatcher = Arc::clone(&self.dispatcher);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(dispatcher, stream).await {
                            debug!(%peer, error = %e, "RPC connection closed with error");
                        }
                    });
                }
                Err(e) => {
                    warn!(error = %e, "Failed to accept RPC connection");
                }
            }
        }
    }
}

/// One request per line; malformed lines get a structured error back.
async fn handle_connection(
    dispatcher: Arc<CommandDispatcher>,
    stream: TcpStream,
) -> std::io::Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            return Ok(());
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<RpcRequest>(trimmed) {
            Ok(request) if request.command == "help" => {
                if request.help {
                    RpcResponse::result(Value::String(HELP_USAGE.to_string()))
                } else {
                    render_help(&dispatcher, &request.params).into()
                }
            }
            Ok(request) => dispatcher.dispatch_request(request).await,
            Err(e) => RpcResponse::error(RpcError::invalid_params(format!(
                "Malformed request: {e}"
            ))),
        };

        let mut out = serde_json::to_string(&response).unwrap_or_else(|_| {
            r#"{"error":{"code":-32603,"message":"Internal error"}}"#.to_string()
        });
        out.push('\n');
        write_half.write_all(out.as_bytes()).await?;
    }
}
