use std::path::PathBuf;

use crate::application::ports::{CompletionError, PdfEngineError, SchemaError};
use crate::domain::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("configuration: {0}")]
    Configuration(#[from] ConfigError),
    #[error("invalid JSON schema: {0}")]
    InvalidSchema(#[from] SchemaError),
    #[error("either a PDF path or a PDF buffer must be provided")]
    MissingSource,
    #[error("failed to read PDF from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid PDF: file does not contain PDF signature")]
    InvalidPdf,
    #[error("PDF processing failed: {0}")]
    PdfProcessing(String),
    #[error("failed to convert PDF to images: {0}")]
    ImageConversion(#[source] PdfEngineError),
    #[error("PDF contains no extractable text and vision mode is disabled")]
    VisionDisabled,
    #[error("completion: {0}")]
    Completion(#[from] CompletionError),
}

/// Flat classification of [`ExtractionError`], including the nested completion failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    InvalidSchema,
    MissingSource,
    Io,
    InvalidPdf,
    PdfProcessing,
    ImageConversion,
    VisionDisabled,
    Transport,
    Remote,
    InvalidResponse,
    EmptyCompletion,
    MalformedCompletion,
}

impl ExtractionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::InvalidSchema(_) => ErrorKind::InvalidSchema,
            Self::MissingSource => ErrorKind::MissingSource,
            Self::Io { .. } => ErrorKind::Io,
            Self::InvalidPdf => ErrorKind::InvalidPdf,
            Self::PdfProcessing(_) => ErrorKind::PdfProcessing,
            Self::ImageConversion(_) => ErrorKind::ImageConversion,
            Self::VisionDisabled => ErrorKind::VisionDisabled,
            Self::Completion(e) => match e {
                CompletionError::Transport(_) => ErrorKind::Transport,
                CompletionError::Remote { .. } => ErrorKind::Remote,
                CompletionError::InvalidResponse(_) => ErrorKind::InvalidResponse,
                CompletionError::EmptyCompletion => ErrorKind::EmptyCompletion,
                CompletionError::MalformedCompletion(_) => ErrorKind::MalformedCompletion,
            },
        }
    }

    /// HTTP status of a non-success completion response.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            Self::Completion(CompletionError::Remote { status, .. }) => Some(*status),
            _ => None,
        }
    }
}
