//! Research-credit source adapter: fetches the authoritative (hash, contract)
//! pair from the external statistics process over the same one-line JSON
//! transport as the scoring bridge.

use async_trait::async_trait;
use rc_neural::{NeuralError, NeuralResult, ResearchSource};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::debug;

/// Source backed by a statistics process on a local TCP address.
pub struct ProcessResearchSource {
    addr: String,
}

impl ProcessResearchSource {
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }
}

#[async_trait]
impl ResearchSource for ProcessResearchSource {
    async fn fetch(&self, cpid: &str, quorum_data: &str) -> NeuralResult<(String, String)> {
        let stream = TcpStream::connect(&self.addr)
            .await
            .map_err(|e| NeuralError::SourceUnavailable(e.to_string()))?;
        let (read_half, mut write_half) = stream.into_split();

        let request = json!({ "op": "fetch", "cpid": cpid, "quorum_data": quorum_data });
        let mut line = serde_json::to_string(&request)
            .map_err(|e| NeuralError::Parse(e.to_string()))?;
        line.push('\n');
        write_half
            .write_all(line.as_bytes())
            .await
            .map_err(|e| NeuralError::SourceUnavailable(e.to_string()))?;

        let mut reader = BufReader::new(read_half);
        let mut response = String::new();
        reader
            .read_line(&mut response)
            .await
            .map_err(|e| NeuralError::SourceUnavailable(e.to_string()))?;

        let value: Value = serde_json::from_str(response.trim())
            .map_err(|e| NeuralError::Parse(e.to_string()))?;
        if let Some(error) = value.get("error").and_then(Value::as_str) {
            return Err(NeuralError::SourceUnavailable(error.to_string()));
        }

        let hash = value
            .get("hash")
            .and_then(Value::as_str)
            .ok_or_else(|| NeuralError::Parse("fetch response missing hash".into()))?;
        let contract = value
            .get("contract")
            .and_then(Value::as_str)
            .ok_or_else(|| NeuralError::Parse("fetch response missing contract".into()))?;

        debug!(addr = %self.addr, cpid, "Fetched quorum data");
        Ok((hash.to_string(), contract.to_string()))
    }
}
