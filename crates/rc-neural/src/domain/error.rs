//! Error types for gateway and synchronization operations.

/// Errors produced by the neural gateway and quorum synchronization.
#[derive(Debug, thiserror::Error)]
pub enum NeuralError {
    /// Neural network features are disabled for this build/configuration.
    #[error("neural network is disabled")]
    Disabled,

    /// The external scoring engine could not be reached.
    #[error("scoring bridge unavailable: {0}")]
    BridgeUnavailable(String),

    /// The research-credit data source could not be reached.
    #[error("research source unavailable: {0}")]
    SourceUnavailable(String),

    /// Malformed data returned by an external collaborator.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for neural gateway operations.
pub type NeuralResult<T> = Result<T, NeuralError>;
