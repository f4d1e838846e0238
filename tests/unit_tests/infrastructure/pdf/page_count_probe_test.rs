use schemapdf::application::ports::PdfEngineError;
use schemapdf::infrastructure::pdf::probe_page_count;

#[test]
fn given_two_page_pdf_when_probing_then_returns_two() {
    let pdf_bytes = include_bytes!("../fixtures/two_pages.pdf");

    let result = probe_page_count(pdf_bytes);

    assert!(
        matches!(result, Ok(2)),
        "expected Ok(2) but got: {:?}",
        result
    );
}

#[test]
fn given_non_pdf_bytes_when_probing_then_returns_page_count_failed() {
    let result = probe_page_count(b"not a pdf at all");

    assert!(
        matches!(result, Err(PdfEngineError::PageCountFailed(_))),
        "expected PageCountFailed but got: {:?}",
        result
    );
}

#[test]
fn given_empty_bytes_when_probing_then_returns_error() {
    assert!(probe_page_count(b"").is_err());
}
