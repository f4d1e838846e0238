use serde_json::Value;

use crate::application::ports::{
    ChatCompletionRequest, ChatMessage, ContentPart, ImageUrl, MessageContent, ResponseFormat,
};
use crate::domain::{DocumentContent, ExtractorConfig, PageImage};

use super::ExtractionError;

pub const TEXT_INSTRUCTION: &str = "Extract the following information from this text:";
pub const VISION_INSTRUCTION: &str =
    "Extract the following structured information from these document pages:";
pub const RESPONSE_FORMAT_NAME: &str = "extracted_data";
pub const DEFAULT_TEMPERATURE: f64 = 0.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SamplingOptions {
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

/// Shapes a schema-constrained chat completion for text or page-image content.
pub struct RequestBuilder<'a> {
    config: &'a ExtractorConfig,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn build(
        &self,
        content: &DocumentContent,
        schema: &Value,
        sampling: SamplingOptions,
    ) -> Result<ChatCompletionRequest, ExtractionError> {
        let (model, user_content) = match content {
            DocumentContent::Text(text) => (self.config.text_model(), text_content(text)),
            DocumentContent::Pages(pages) => {
                if !self.config.vision_enabled() {
                    return Err(ExtractionError::VisionDisabled);
                }
                (self.config.vision_model(), vision_content(pages))
            }
        };

        let mut messages = Vec::with_capacity(2);
        if !self.config.system_prompt().is_empty() {
            messages.push(ChatMessage::system(self.config.system_prompt()));
        }
        messages.push(ChatMessage::user(user_content));

        Ok(ChatCompletionRequest {
            model: model.to_string(),
            messages,
            response_format: ResponseFormat::strict_json_schema(
                RESPONSE_FORMAT_NAME,
                schema.clone(),
            ),
            temperature: sampling.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: sampling.max_tokens,
        })
    }
}

fn text_content(text: &str) -> MessageContent {
    MessageContent::Text(format!("{TEXT_INSTRUCTION}\n\n{text}"))
}

fn vision_content(pages: &[PageImage]) -> MessageContent {
    let mut parts = Vec::with_capacity(pages.len() + 1);
    parts.push(ContentPart::Text {
        text: VISION_INSTRUCTION.to_string(),
    });
    parts.extend(pages.iter().map(|page| ContentPart::ImageUrl {
        image_url: ImageUrl {
            url: page.to_data_uri(),
        },
    }));
    MessageContent::Parts(parts)
}
