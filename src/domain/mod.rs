mod extraction_mode;
mod extraction_request;
mod extraction_result;
mod extractor_config;
mod parsed_document;

pub use extraction_mode::ExtractionMode;
pub use extraction_request::{ExtractionRequest, PdfSource};
pub use extraction_result::ExtractionResult;
pub use extractor_config::{
    ConfigError, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, DEFAULT_TEXT_THRESHOLD,
    ExtractorConfig, ExtractorSettings,
};
pub use parsed_document::{DocumentContent, PageImage, ParsedDocument};
