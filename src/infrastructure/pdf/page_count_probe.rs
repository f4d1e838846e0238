use std::io::Write;

use pdf_oxide::PdfDocument;

use crate::application::ports::PdfEngineError;

/// Counts pages with pdf_oxide, independently of the document session.
pub fn probe_page_count(data: &[u8]) -> Result<usize, PdfEngineError> {
    let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
        PdfEngineError::PageCountFailed(format!("failed to create temp file: {e}"))
    })?;

    temp_file
        .write_all(data)
        .and_then(|()| temp_file.flush())
        .map_err(|e| PdfEngineError::PageCountFailed(format!("failed to write temp file: {e}")))?;

    let temp_path = temp_file.path().to_path_buf();

    // pdf_oxide can panic on malformed font tables.
    std::panic::catch_unwind(move || {
        let doc = PdfDocument::open(&temp_path)
            .map_err(|e| PdfEngineError::PageCountFailed(format!("failed to parse PDF: {e}")))?;
        doc.page_count().map_err(|e| {
            PdfEngineError::PageCountFailed(format!("failed to read page count: {e}"))
        })
    })
    .unwrap_or_else(|_| {
        Err(PdfEngineError::PageCountFailed(
            "panic during page count probe".to_string(),
        ))
    })
}
