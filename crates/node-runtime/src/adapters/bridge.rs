//! Scoring-bridge adapter: one-line JSON requests to the external scoring
//! engine over TCP.
//!
//! The engine is a separate process; each call opens a fresh connection,
//! writes a single JSON line, and reads a single JSON line back. No timeout
//! is applied here - callers bound their own waits.

use async_trait::async_trait;
use rc_neural::{NeuralError, NeuralResult, ScoringBridge};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::debug;

/// Bridge to a scoring engine listening on a local TCP address.
pub struct ProcessScoringBridge {
    addr: String,
}

impl ProcessScoringBridge {
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }

    /// One request/response round trip.
    async fn round_trip(&self, request: Value) -> NeuralResult<Value> {
        let stream = TcpStream::connect(&self.addr)
            .await
            .map_err(|e| NeuralError::BridgeUnavailable(e.to_string()))?;
        let (read_half, mut write_half) = stream.into_split();

        let mut line = serde_json::to_string(&request)
            .map_err(|e| NeuralError::Parse(e.to_string()))?;
        line.push('\n');
        write_half
            .write_all(line.as_bytes())
            .await
            .map_err(|e| NeuralError::BridgeUnavailable(e.to_string()))?;

        let mut reader = BufReader::new(read_half);
        let mut response = String::new();
        reader
            .read_line(&mut response)
            .await
            .map_err(|e| NeuralError::BridgeUnavailable(e.to_string()))?;

        debug!(addr = %self.addr, "Scoring bridge round trip complete");
        let value: Value = serde_json::from_str(response.trim())
            .map_err(|e| NeuralError::Parse(e.to_string()))?;

        if let Some(error) = value.get("error").and_then(Value::as_str) {
            return Err(NeuralError::BridgeUnavailable(error.to_string()));
        }
        Ok(value)
    }

    async fn string_op(&self, op: &str) -> NeuralResult<String> {
        let value = self.round_trip(json!({ "op": op })).await?;
        value
            .get("result")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| NeuralError::Parse(format!("missing string result for {op}")))
    }
}

#[async_trait]
impl ScoringBridge for ProcessScoringBridge {
    async fn compute_hash(&self) -> NeuralResult<String> {
        self.string_op("compute_hash").await
    }

    async fn compute_contract(&self) -> NeuralResult<String> {
        self.string_op("compute_contract").await
    }

    async fn execute(&self, function: &str, data: &str) -> NeuralResult<f64> {
        let value = self
            .round_trip(json!({ "op": "execute", "function": function, "data": data }))
            .await?;
        value
            .get("result")
            .and_then(Value::as_f64)
            .ok_or_else(|| NeuralError::Parse("missing numeric result for execute".into()))
    }

    async fn probe(&self) -> i64 {
        match self.round_trip(json!({ "op": "probe" })).await {
            Ok(value) => value.get("result").and_then(Value::as_i64).unwrap_or(0),
            Err(_) => 0,
        }
    }
}
