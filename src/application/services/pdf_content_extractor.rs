use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{PageSource, PdfEngine, PdfEngineError};
use crate::domain::{
    DEFAULT_TEXT_THRESHOLD, DocumentContent, ExtractionMode, PageImage, ParsedDocument,
};

use super::ExtractionError;

const PDF_SIGNATURE: &[u8; 4] = b"%PDF";

/// Cheap fast-reject gate: the first four bytes must be `%PDF`.
pub fn is_pdf(data: &[u8]) -> bool {
    data.starts_with(PDF_SIGNATURE)
}

/// Same as [`is_pdf`] for a file on disk. Unreadable files are not PDFs.
pub fn is_pdf_file(path: &Path) -> bool {
    let mut header = [0u8; 4];
    File::open(path)
        .and_then(|mut file| file.read_exact(&mut header))
        .map(|()| is_pdf(&header))
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    pub text_threshold: Option<usize>,
    pub vision_enabled: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            text_threshold: None,
            vision_enabled: true,
        }
    }
}

#[derive(Clone)]
pub struct PdfContentExtractor {
    engine: Arc<dyn PdfEngine>,
}

impl PdfContentExtractor {
    pub fn new(engine: Arc<dyn PdfEngine>) -> Self {
        Self { engine }
    }

    pub fn parse_path(
        &self,
        path: &Path,
        options: ParseOptions,
    ) -> Result<ParsedDocument, ExtractionError> {
        let data = std::fs::read(path).map_err(|source| ExtractionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&data, options)
    }

    /// Extracts text from every page and, when the text falls short of the
    /// threshold, rasterizes the same open document instead.
    pub fn parse(
        &self,
        data: &[u8],
        options: ParseOptions,
    ) -> Result<ParsedDocument, ExtractionError> {
        if !is_pdf(data) {
            return Err(ExtractionError::InvalidPdf);
        }

        let threshold = options.text_threshold.unwrap_or(DEFAULT_TEXT_THRESHOLD);
        let page_count = self.probe_page_count(data);

        let mut outcome: Option<Result<DocumentContent, ExtractionError>> = None;
        let session = self.engine.with_document(data, &mut |pages: &dyn PageSource| {
            let text = extract_text(pages);
            let mode = ExtractionMode::select(&text, threshold);
            tracing::info!(
                mode = mode.as_str(),
                text_chars = text.trim().chars().count(),
                threshold,
                "Extraction mode selected"
            );

            outcome = Some(match mode {
                ExtractionMode::Text => Ok(DocumentContent::Text(text)),
                ExtractionMode::NeedsVision if !options.vision_enabled => {
                    Err(ExtractionError::VisionDisabled)
                }
                ExtractionMode::NeedsVision => render_pages(pages).map(DocumentContent::Pages),
            });
        });

        let content = match (session, outcome) {
            (Ok(()), Some(content)) => content?,
            (Ok(()), None) => {
                return Err(ExtractionError::PdfProcessing(
                    "document session never ran".to_string(),
                ));
            }
            (Err(e), _) => {
                // Unopenable documents count as text-less; rasterizing them fails below.
                tracing::warn!(error = %e, "Failed to open document for text extraction");
                if !options.vision_enabled {
                    return Err(ExtractionError::VisionDisabled);
                }
                return Err(ExtractionError::ImageConversion(e));
            }
        };

        Ok(ParsedDocument {
            page_count,
            content,
        })
    }

    fn probe_page_count(&self, data: &[u8]) -> usize {
        match self.engine.probe_page_count(data) {
            Ok(count) => count.max(1),
            Err(e) => {
                tracing::warn!(error = %e, "Page count probe failed, assuming a single page");
                1
            }
        }
    }
}

/// Page texts in page order joined by newlines. Pages that fail are skipped.
pub fn extract_text(pages: &dyn PageSource) -> String {
    let page_count = pages.page_count();
    let mut texts: Vec<String> = Vec::with_capacity(page_count);

    for index in 0..page_count {
        match pages.page_text(index) {
            Ok(text) => texts.push(text),
            Err(e) => tracing::warn!(page = index + 1, error = %e, "Skipping page"),
        }
    }

    texts.join("\n")
}

/// Every page as a PNG, in order. Any single failure fails the whole conversion.
pub fn render_pages(pages: &dyn PageSource) -> Result<Vec<PageImage>, ExtractionError> {
    let page_count = pages.page_count();
    if page_count == 0 {
        return Err(ExtractionError::ImageConversion(PdfEngineError::NoPages));
    }

    let mut images = Vec::with_capacity(page_count);
    for index in 0..page_count {
        let png_bytes = pages
            .render_page_png(index)
            .map_err(ExtractionError::ImageConversion)?;
        images.push(PageImage::new(index + 1, png_bytes));
    }

    tracing::info!(page_count, "PDF rasterization complete");

    Ok(images)
}
