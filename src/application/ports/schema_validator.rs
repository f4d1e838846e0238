use serde_json::Value;

pub trait SchemaValidator: Send + Sync {
    fn validate(&self, schema: &Value) -> Result<(), SchemaError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("schema must be a non-null object")]
    Missing,
    #[error("schema must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("schema cannot be empty")]
    Empty,
    #[error("schema validation failed: {0}")]
    Malformed(String),
}
