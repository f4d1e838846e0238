use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub data: Value,
    pub tokens_used: u64,
    /// The model name the remote service reports, which may differ from the requested one.
    pub model: String,
}
