//! RPC error type - the only error shape crossing the dispatch boundary.

use rc_neural::NeuralError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error codes returned to RPC callers.
pub mod codes {
    // JSON-RPC 2.0 standard errors
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    // Node errors (-32000 range)
    pub const FORBIDDEN_BY_SAFE_MODE: i32 = -32000;
    pub const NEURAL_UNAVAILABLE: i32 = -32001;
    pub const WALLET_ERROR: i32 = -32002;
    pub const MISC_ERROR: i32 = -32004;
}

/// Structured error returned to RPC and command-line callers.
#[derive(Debug, Clone)]
pub struct RpcError {
    /// Numeric error code
    pub code: i32,
    /// Human-readable message
    pub message: String,
}

impl RpcError {
    /// Create a new RPC error
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Unknown command name.
    pub fn method_not_found() -> Self {
        Self::new(codes::METHOD_NOT_FOUND, "Method not found")
    }

    /// Positional parameter kind mismatch, naming the offending index.
    pub fn bad_positional(index: usize, expected: &str) -> Self {
        Self::new(
            codes::INVALID_PARAMS,
            format!("Expected type {expected} for parameter {index}"),
        )
    }

    /// Named parameter missing or of the wrong kind.
    pub fn bad_named(field: &str, expected: &str) -> Self {
        Self::new(
            codes::INVALID_PARAMS,
            format!("Expected type {expected} for field {field}"),
        )
    }

    /// Generic invalid-parameter error.
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_PARAMS, details.into())
    }

    /// Command refused under the restricted safe-mode posture.
    pub fn forbidden_by_safe_mode(command: &str) -> Self {
        Self::new(
            codes::FORBIDDEN_BY_SAFE_MODE,
            format!("Command '{command}' is not allowed in safe mode"),
        )
    }

    /// Neural network disabled or the external capability unreachable.
    pub fn neural_unavailable(details: impl Into<String>) -> Self {
        Self::new(codes::NEURAL_UNAVAILABLE, details.into())
    }

    /// Wallet collaborator failure.
    pub fn wallet(details: impl Into<String>) -> Self {
        Self::new(codes::WALLET_ERROR, details.into())
    }

    /// Anticipated handler failure outside the other categories.
    pub fn misc(details: impl Into<String>) -> Self {
        Self::new(codes::MISC_ERROR, details.into())
    }

    /// Unanticipated handler failure, wrapped generically.
    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(
            codes::INTERNAL_ERROR,
            format!("Internal error: {}", details.into()),
        )
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for RpcError {}

impl From<NeuralError> for RpcError {
    fn from(e: NeuralError) -> Self {
        RpcError::neural_unavailable(e.to_string())
    }
}

impl Serialize for RpcError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("RpcError", 2)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("message", &self.message)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for RpcError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ErrorHelper {
            code: i32,
            message: String,
        }

        let helper = ErrorHelper::deserialize(deserializer)?;
        Ok(RpcError {
            code: helper.code,
            message: helper.message,
        })
    }
}

/// Result type for RPC operations
pub type RpcResult<T> = Result<T, RpcError>;
