use std::path::{Path, PathBuf};

use serde_json::Value;

/// Where the PDF bytes come from. A buffer wins over a path when both are set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PdfSource<'a> {
    Buffer(&'a [u8]),
    Path(&'a Path),
}

impl PdfSource<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Buffer(_) => "buffer",
            Self::Path(_) => "path",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtractionRequest {
    pub schema: Value,
    pub pdf_path: Option<PathBuf>,
    pub pdf_buffer: Option<Vec<u8>>,
    /// Sampling temperature, conventionally 0 to 2. Not enforced.
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl ExtractionRequest {
    pub fn from_path(schema: Value, path: impl Into<PathBuf>) -> Self {
        Self {
            schema,
            pdf_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn from_buffer(schema: Value, buffer: Vec<u8>) -> Self {
        Self {
            schema,
            pdf_buffer: Some(buffer),
            ..Self::default()
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// An empty path counts as no path.
    pub fn source(&self) -> Option<PdfSource<'_>> {
        let path = self
            .pdf_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty());
        match (&self.pdf_buffer, path) {
            (Some(buffer), _) => Some(PdfSource::Buffer(buffer)),
            (None, Some(path)) => Some(PdfSource::Path(path)),
            (None, None) => None,
        }
    }
}
