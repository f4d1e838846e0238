/// Which extraction path a document takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    Text,
    NeedsVision,
}

impl ExtractionMode {
    /// Text mode when the trimmed text has at least `threshold` characters.
    pub fn select(text: &str, threshold: usize) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.chars().count() < threshold {
            Self::NeedsVision
        } else {
            Self::Text
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::NeedsVision => "vision",
        }
    }
}
