/// Read access to the pages of an open document. Indices are 0-based.
pub trait PageSource {
    fn page_count(&self) -> usize;
    fn page_text(&self, index: usize) -> Result<String, PdfEngineError>;
    fn render_page_png(&self, index: usize) -> Result<Vec<u8>, PdfEngineError>;
}

/// Boundary to the native PDF library.
///
/// The document handle never escapes `with_document`: it is opened, lent to
/// `session`, and released before the call returns, on success or failure.
pub trait PdfEngine: Send + Sync {
    fn probe_page_count(&self, data: &[u8]) -> Result<usize, PdfEngineError>;

    fn with_document(
        &self,
        data: &[u8],
        session: &mut dyn FnMut(&dyn PageSource),
    ) -> Result<(), PdfEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PdfEngineError {
    #[error("pdf engine unavailable: {0}")]
    Unavailable(String),
    #[error("failed to open document: {0}")]
    OpenFailed(String),
    #[error("document has no pages")]
    NoPages,
    #[error("page count probe failed: {0}")]
    PageCountFailed(String),
    #[error("text extraction failed on page {index}: {reason}")]
    PageText { index: usize, reason: String },
    #[error("render failed on page {index}: {reason}")]
    Render { index: usize, reason: String },
    #[error("PNG encode failed on page {index}: {reason}")]
    Encode { index: usize, reason: String },
}
