use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;

use crate::application::ports::{ChatCompletionRequest, CompletionClient, CompletionError};
use crate::domain::ExtractionResult;

/// Returns a canned result and remembers the last request it was sent.
pub struct MockCompletionClient {
    data: Value,
    tokens_used: u64,
    model: String,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatCompletionRequest>>,
}

impl MockCompletionClient {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            tokens_used: 0,
            model: "mock-model".to_string(),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn with_usage(mut self, tokens_used: u64, model: &str) -> Self {
        self.tokens_used = tokens_used;
        self.model = model.to_string();
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatCompletionRequest> {
        self.last_request
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ExtractionResult, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }

        Ok(ExtractionResult {
            data: self.data.clone(),
            tokens_used: self.tokens_used,
            model: self.model.clone(),
        })
    }
}
