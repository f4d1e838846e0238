use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{CompletionClient, PdfEngine, SchemaValidator};
use crate::domain::{
    DocumentContent, ExtractionRequest, ExtractionResult, ExtractorConfig, PdfSource,
};

use super::pdf_content_extractor::{ParseOptions, PdfContentExtractor};
use super::request_builder::{RequestBuilder, SamplingOptions};
use super::ExtractionError;

/// Runs one PDF through validation, parsing, mode selection and a single
/// schema-constrained completion.
pub struct ExtractionService {
    config: ExtractorConfig,
    schema_validator: Arc<dyn SchemaValidator>,
    pdf_extractor: PdfContentExtractor,
    completion_client: Arc<dyn CompletionClient>,
}

impl ExtractionService {
    pub fn new(
        config: ExtractorConfig,
        schema_validator: Arc<dyn SchemaValidator>,
        pdf_engine: Arc<dyn PdfEngine>,
        completion_client: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            config,
            schema_validator,
            pdf_extractor: PdfContentExtractor::new(pdf_engine),
            completion_client,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn model(&self) -> &str {
        self.config.model()
    }

    pub fn text_model(&self) -> &str {
        self.config.text_model()
    }

    pub fn vision_model(&self) -> &str {
        self.config.vision_model()
    }

    #[tracing::instrument(
        skip(self, request),
        fields(extraction_id = %Uuid::new_v4())
    )]
    pub async fn extract(
        &self,
        request: &ExtractionRequest,
    ) -> Result<ExtractionResult, ExtractionError> {
        let source = request.source().ok_or(ExtractionError::MissingSource)?;
        self.schema_validator.validate(&request.schema)?;

        let data = match source {
            PdfSource::Buffer(buffer) => buffer.to_vec(),
            PdfSource::Path(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|e| ExtractionError::Io {
                        path: path.to_path_buf(),
                        source: e,
                    })?
            }
        };

        tracing::info!(
            source = source.kind(),
            size_bytes = data.len(),
            "PDF loaded"
        );

        let extractor = self.pdf_extractor.clone();
        let options = ParseOptions {
            text_threshold: Some(self.config.text_threshold()),
            vision_enabled: self.config.vision_enabled(),
        };

        let document = tokio::task::spawn_blocking(move || extractor.parse(&data, options))
            .await
            .map_err(|e| ExtractionError::PdfProcessing(format!("task join error: {e}")))??;

        tracing::info!(
            page_count = document.page_count,
            content = document.content.kind(),
            "PDF parsed"
        );

        let sampling = SamplingOptions {
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };
        let payload =
            RequestBuilder::new(&self.config).build(&document.content, &request.schema, sampling)?;

        let image_count = match &document.content {
            DocumentContent::Text(_) => 0,
            DocumentContent::Pages(pages) => pages.len(),
        };
        tracing::info!(
            model = %payload.model,
            image_count,
            max_tokens = ?payload.max_tokens,
            "Sending completion request"
        );

        let result = self.completion_client.complete(&payload).await?;

        tracing::info!(
            model = %result.model,
            tokens_used = result.tokens_used,
            "Extraction complete"
        );

        Ok(result)
    }
}
