mod mock_pdf_engine;
mod page_count_probe;
mod pdfium_engine;

pub use mock_pdf_engine::MockPdfEngine;
pub use page_count_probe::probe_page_count;
pub use pdfium_engine::{PdfiumEngine, RENDER_DPI};
