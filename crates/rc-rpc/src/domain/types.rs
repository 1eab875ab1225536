//! Request and response shapes for the dispatch boundary.

use crate::domain::error::RpcError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Command parameters: a positional list or a named object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcParams {
    /// Positional parameter list.
    Positional(Vec<Value>),
    /// Named parameter object.
    Named(Map<String, Value>),
}

impl RpcParams {
    /// Empty positional parameters.
    pub fn none() -> Self {
        RpcParams::Positional(Vec::new())
    }

    /// Positional view, or an error when the request carried a named object.
    pub fn positional(&self) -> Result<&[Value], RpcError> {
        match self {
            RpcParams::Positional(values) => Ok(values),
            RpcParams::Named(_) => Err(RpcError::invalid_params(
                "Expected positional parameters, got an object",
            )),
        }
    }

    /// Named view, or an error when the request carried a positional list.
    pub fn named(&self) -> Result<&Map<String, Value>, RpcError> {
        match self {
            RpcParams::Named(object) => Ok(object),
            RpcParams::Positional(_) => Err(RpcError::invalid_params(
                "Expected a parameter object, got a positional list",
            )),
        }
    }

    /// Positional parameter at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            RpcParams::Positional(values) => values.get(index),
            RpcParams::Named(_) => None,
        }
    }

    /// Required string at the given positional index.
    pub fn string_at(&self, index: usize) -> Result<&str, RpcError> {
        self.get(index)
            .and_then(Value::as_str)
            .ok_or_else(|| RpcError::bad_positional(index, "String"))
    }

    pub fn len(&self) -> usize {
        match self {
            RpcParams::Positional(values) => values.len(),
            RpcParams::Named(object) => object.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RpcParams {
    fn default() -> Self {
        Self::none()
    }
}

/// One inbound request: command name, parameters, and the help flag.
///
/// The same shape serves the line-oriented local transport and the
/// command-line single-shot mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Command name, matched exactly against the registry.
    pub command: String,
    /// Positional or named parameters.
    #[serde(default)]
    pub params: RpcParams,
    /// When set, the command returns its usage text and performs no work.
    #[serde(default)]
    pub help: bool,
}

impl RpcRequest {
    pub fn new(command: impl Into<String>, params: RpcParams) -> Self {
        Self {
            command: command.into(),
            params,
            help: false,
        }
    }

    /// A request for the command's usage text.
    pub fn help_for(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            params: RpcParams::none(),
            help: true,
        }
    }
}

/// One outbound response: a result value or a structured error, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    pub fn result(value: Value) -> Self {
        Self {
            result: Some(value),
            error: None,
        }
    }

    pub fn error(error: RpcError) -> Self {
        Self {
            result: None,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<Result<Value, RpcError>> for RpcResponse {
    fn from(result: Result<Value, RpcError>) -> Self {
        match result {
            Ok(value) => Self::result(value),
            Err(error) => Self::error(error),
        }
    }
}
