use async_trait::async_trait;

use crate::domain::ExtractionResult;

use super::chat_completion::ChatCompletionRequest;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// One POST, one attempt. No retries.
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ExtractionResult, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(String),
    #[error("completion endpoint returned {status}: {body}")]
    Remote { status: u16, body: String },
    #[error("invalid completion response: {0}")]
    InvalidResponse(String),
    #[error("completion contained no content")]
    EmptyCompletion,
    #[error("completion content is not valid JSON: {0}")]
    MalformedCompletion(#[source] serde_json::Error),
}
