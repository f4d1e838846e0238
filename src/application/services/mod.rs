mod extraction_error;
mod extraction_service;
mod pdf_content_extractor;
mod request_builder;

pub use extraction_error::{ErrorKind, ExtractionError};
pub use extraction_service::ExtractionService;
pub use pdf_content_extractor::{
    ParseOptions, PdfContentExtractor, extract_text, is_pdf, is_pdf_file, render_pages,
};
pub use request_builder::{
    DEFAULT_TEMPERATURE, RESPONSE_FORMAT_NAME, RequestBuilder, SamplingOptions, TEXT_INSTRUCTION,
    VISION_INSTRUCTION,
};
