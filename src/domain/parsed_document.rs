use base64::{Engine as _, engine::general_purpose};

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// Best-effort; 1 when the page-count probe fails.
    pub page_count: usize,
    pub content: DocumentContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentContent {
    Text(String),
    Pages(Vec<PageImage>),
}

impl DocumentContent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Pages(_) => "pages",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageImage {
    /// 1-indexed.
    pub page_number: usize,
    pub png_bytes: Vec<u8>,
}

impl PageImage {
    pub fn new(page_number: usize, png_bytes: Vec<u8>) -> Self {
        Self {
            page_number,
            png_bytes,
        }
    }

    pub fn to_data_uri(&self) -> String {
        let b64 = general_purpose::STANDARD.encode(&self.png_bytes);
        format!("data:image/png;base64,{b64}")
    }
}
