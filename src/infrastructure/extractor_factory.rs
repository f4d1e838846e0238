use std::sync::Arc;

use crate::application::services::{ExtractionError, ExtractionService};
use crate::domain::{ExtractorConfig, ExtractorSettings};

use super::llm::OpenAiCompletionClient;
use super::pdf::PdfiumEngine;
use super::schema::JsonSchemaValidator;

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Resolves defaults and wires the production adapters.
    pub fn create(settings: ExtractorSettings) -> Result<ExtractionService, ExtractionError> {
        let config = ExtractorConfig::resolve(settings)?;

        tracing::info!(
            base_url = config.base_url(),
            text_model = config.text_model(),
            vision_model = config.vision_model(),
            vision_enabled = config.vision_enabled(),
            text_threshold = config.text_threshold(),
            "Creating PDF extractor"
        );

        let completion_client = OpenAiCompletionClient::new(config.base_url(), config.api_key());

        Ok(ExtractionService::new(
            config,
            Arc::new(JsonSchemaValidator::new()),
            Arc::new(PdfiumEngine::new()),
            Arc::new(completion_client),
        ))
    }
}
