use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{PageSource, PdfEngine, PdfEngineError};

/// In-memory engine serving canned pages.
pub struct MockPdfEngine {
    pages: Vec<String>,
    unreadable_pages: HashSet<usize>,
    unrenderable_pages: HashSet<usize>,
    probe_fails: bool,
    open_fails: bool,
    opens: AtomicUsize,
    renders: AtomicUsize,
}

impl MockPdfEngine {
    pub fn with_pages(pages: &[&str]) -> Self {
        Self {
            pages: pages.iter().map(|p| (*p).to_string()).collect(),
            unreadable_pages: HashSet::new(),
            unrenderable_pages: HashSet::new(),
            probe_fails: false,
            open_fails: false,
            opens: AtomicUsize::new(0),
            renders: AtomicUsize::new(0),
        }
    }

    pub fn with_unreadable_page(mut self, index: usize) -> Self {
        self.unreadable_pages.insert(index);
        self
    }

    pub fn with_unrenderable_page(mut self, index: usize) -> Self {
        self.unrenderable_pages.insert(index);
        self
    }

    pub fn with_failing_probe(mut self) -> Self {
        self.probe_fails = true;
        self
    }

    pub fn with_failing_open(mut self) -> Self {
        self.open_fails = true;
        self
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }

    /// Bytes the mock renders for a 0-based page index.
    pub fn fake_png(index: usize) -> Vec<u8> {
        format!("\u{89}PNG page {}", index + 1).into_bytes()
    }
}

impl PdfEngine for MockPdfEngine {
    fn probe_page_count(&self, _data: &[u8]) -> Result<usize, PdfEngineError> {
        if self.probe_fails {
            return Err(PdfEngineError::PageCountFailed("mock probe failure".to_string()));
        }
        Ok(self.pages.len())
    }

    fn with_document(
        &self,
        _data: &[u8],
        session: &mut dyn FnMut(&dyn PageSource),
    ) -> Result<(), PdfEngineError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        if self.open_fails {
            return Err(PdfEngineError::OpenFailed("mock open failure".to_string()));
        }
        session(self);
        Ok(())
    }
}

impl PageSource for MockPdfEngine {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, PdfEngineError> {
        if self.unreadable_pages.contains(&index) {
            return Err(PdfEngineError::PageText {
                index,
                reason: "mock text failure".to_string(),
            });
        }
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| PdfEngineError::PageText {
                index,
                reason: "no such page".to_string(),
            })
    }

    fn render_page_png(&self, index: usize) -> Result<Vec<u8>, PdfEngineError> {
        self.renders.fetch_add(1, Ordering::SeqCst);
        if self.unrenderable_pages.contains(&index) {
            return Err(PdfEngineError::Render {
                index,
                reason: "mock render failure".to_string(),
            });
        }
        Ok(Self::fake_png(index))
    }
}
