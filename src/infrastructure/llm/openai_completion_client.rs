use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{ChatCompletionRequest, CompletionClient, CompletionError};
use crate::domain::ExtractionResult;
use crate::infrastructure::observability::log_preview;

/// Client for any OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiCompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiCompletionClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::with_client(Client::new(), base_url, api_key)
    }

    pub fn with_client(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    total_tokens: Option<u64>,
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    #[tracing::instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ExtractionResult, CompletionError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                body = %log_preview(&body),
                "Completion endpoint returned an error"
            );
            return Err(CompletionError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let raw_bytes = response
            .bytes()
            .await
            .map_err(|e| CompletionError::Transport(format!("network/read error: {e}")))?;

        let completion: ChatCompletion = serde_json::from_slice(&raw_bytes).map_err(|e| {
            let raw_text = String::from_utf8_lossy(&raw_bytes);
            tracing::error!(raw_response = %raw_text, "Failed to parse completion response");
            CompletionError::InvalidResponse(e.to_string())
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(CompletionError::EmptyCompletion)?;

        tracing::debug!(content = %log_preview(&content), "Completion received");

        let data = serde_json::from_str(&content).map_err(CompletionError::MalformedCompletion)?;

        Ok(ExtractionResult {
            data,
            tokens_used: completion
                .usage
                .and_then(|usage| usage.total_tokens)
                .unwrap_or_default(),
            model: completion.model.unwrap_or_default(),
        })
    }
}
