use std::io::Cursor;
use std::sync::Mutex;

use image::ImageFormat;
use pdfium_render::prelude::*;

use crate::application::ports::{PageSource, PdfEngine, PdfEngineError};

use super::page_count_probe::probe_page_count;

pub const RENDER_DPI: f32 = 150.0;

/// Binding pdfium initializes and tears down process-global library state,
/// so document sessions run one at a time.
static SESSION_LOCK: Mutex<()> = Mutex::new(());

/// pdfium-backed engine. Binds the native library per document so no
/// handle outlives a call. Concurrent callers are serialized.
pub struct PdfiumEngine {
    render_dpi: f32,
}

impl Default for PdfiumEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfiumEngine {
    pub fn new() -> Self {
        Self {
            render_dpi: RENDER_DPI,
        }
    }

    pub fn with_render_dpi(render_dpi: f32) -> Self {
        Self { render_dpi }
    }

    fn bind() -> Result<Pdfium, PdfEngineError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| PdfEngineError::Unavailable(format!("pdfium bind failed: {e}")))?;
        Ok(Pdfium::new(bindings))
    }
}

impl PdfEngine for PdfiumEngine {
    fn probe_page_count(&self, data: &[u8]) -> Result<usize, PdfEngineError> {
        probe_page_count(data)
    }

    fn with_document(
        &self,
        data: &[u8],
        session: &mut dyn FnMut(&dyn PageSource),
    ) -> Result<(), PdfEngineError> {
        let _guard = SESSION_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let pdfium = Self::bind()?;
        let document = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(|e| PdfEngineError::OpenFailed(format!("pdfium open failed: {e}")))?;

        let pages = PdfiumPages {
            document: &document,
            render_dpi: self.render_dpi,
        };
        session(&pages);

        Ok(())
    }
}

struct PdfiumPages<'doc, 'lib> {
    document: &'doc PdfDocument<'lib>,
    render_dpi: f32,
}

impl PdfiumPages<'_, '_> {
    fn page(&self, index: usize) -> Result<PdfPage<'_>, String> {
        let page_index = PdfPageIndex::try_from(index)
            .map_err(|_| format!("page index {index} out of range"))?;
        self.document
            .pages()
            .get(page_index)
            .map_err(|e| format!("page access failed: {e}"))
    }
}

impl PageSource for PdfiumPages<'_, '_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_text(&self, index: usize) -> Result<String, PdfEngineError> {
        let page = self
            .page(index)
            .map_err(|reason| PdfEngineError::PageText { index, reason })?;
        let text = page.text().map_err(|e| PdfEngineError::PageText {
            index,
            reason: e.to_string(),
        })?;
        Ok(text.all())
    }

    fn render_page_png(&self, index: usize) -> Result<Vec<u8>, PdfEngineError> {
        let page = self
            .page(index)
            .map_err(|reason| PdfEngineError::Render { index, reason })?;

        let width = (page.width().value * self.render_dpi / 72.0) as i32;
        let height = (page.height().value * self.render_dpi / 72.0) as i32;

        let bitmap = page
            .render_with_config(
                &PdfRenderConfig::new()
                    .set_target_width(width)
                    .set_target_height(height),
            )
            .map_err(|e| PdfEngineError::Render {
                index,
                reason: e.to_string(),
            })?;

        let dynamic_image = bitmap.as_image();
        let mut png_bytes: Vec<u8> = Vec::new();
        dynamic_image
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| PdfEngineError::Encode {
                index,
                reason: e.to_string(),
            })?;

        Ok(png_bytes)
    }
}
