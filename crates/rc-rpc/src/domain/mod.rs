//! Domain types for the command dispatch layer.

pub mod error;
pub mod params;
pub mod types;

pub use error::{codes, RpcError, RpcResult};
pub use params::{check_named, check_positional, ParamKind};
pub use types::{RpcParams, RpcRequest, RpcResponse};
