//! Single-shot command mode: `rc-node <command> [args...]` executes one
//! command against the in-process dispatcher and exits.
//!
//! Each argument is parsed as JSON when it looks like JSON, otherwise taken
//! as a bare string, so `rc-node backupwallet /tmp/wallet.bak` and
//! `rc-node execute '"magnitude"' '"cpid=x"'` both work.

use crate::server::render_help;
use rc_rpc::{CommandDispatcher, RpcParams, RpcRequest};
use serde_json::Value;
use std::sync::Arc;

/// Turn command-line arguments into positional parameters.
pub fn parse_params(args: &[String]) -> RpcParams {
    let values = args
        .iter()
        .map(|arg| serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.clone())))
        .collect();
    RpcParams::Positional(values)
}

/// Execute one command and report the result. Returns the process exit code.
pub async fn run_single_shot(dispatcher: Arc<CommandDispatcher>, args: Vec<String>) -> i32 {
    let command = args[0].clone();
    let params = parse_params(&args[1..]);

    let outcome = if command == "help" {
        render_help(&dispatcher, &params)
    } else {
        dispatcher
            .dispatch(RpcRequest::new(command, params))
            .await
    };

    match outcome {
        Ok(Value::String(text)) => {
            println!("{text}");
            0
        }
        Ok(value) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            );
            0
        }
        Err(error) => {
            eprintln!("error ({}): {}", error.code, error.message);
            1
        }
    }
}
