//! Command Dispatch Layer - registry, validation, gating, and execution for
//! the node's RPC surface.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                   COMMAND DISPATCH (rc-rpc)                    │
//! ├────────────────────────────────────────────────────────────────┤
//! │  request ──→ Lookup ──→ (TypeCheck) ──→ SafeModeGate ──→ Exec  │
//! │                │                            │             │    │
//! │         CommandTable                   NodeFlags       handler │
//! │      (built once, immutable)         (safe-mode bit)      │    │
//! │                                                           ▼    │
//! │                                              NeuralGateway /   │
//! │                                              QuorumSync /      │
//! │                                              collaborator ports│
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every response crossing this boundary is either a result value or an
//! [`RpcError`]; handlers never leak raw internal failures.
//!
//! # Usage
//!
//! ```ignore
//! use rc_rpc::{build_command_table, CommandContext, CommandDispatcher, RpcRequest};
//!
//! let table = Arc::new(build_command_table()?);
//! let dispatcher = CommandDispatcher::new(table, ctx);
//! let response = dispatcher.dispatch_request(request).await;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod context;
pub mod dispatcher;
pub mod domain;
pub mod handlers;
pub mod help;
pub mod registry;

// Re-exports for public API
pub use catalog::build_command_table;
pub use context::{BeaconPort, ChainView, CommandContext, NodeFlags, WalletView};
pub use dispatcher::CommandDispatcher;
pub use domain::error::{codes, RpcError, RpcResult};
pub use domain::params::{check_named, check_positional, ParamKind};
pub use domain::types::{RpcParams, RpcRequest, RpcResponse};
pub use help::HelpFormatter;
pub use registry::{
    CommandCategory, CommandDescriptor, CommandHandler, CommandTable, CommandTableBuilder,
    HandlerFuture, RegistryError,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
