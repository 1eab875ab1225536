//! Domain types for the neural consensus gateway.

pub mod error;
pub mod types;

pub use error::{NeuralError, NeuralResult};
pub use types::{NeuralContract, NeuralHash, SyncRequest};
