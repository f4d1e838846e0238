use schemapdf::application::ports::{CompletionError, SchemaError};
use schemapdf::application::services::{ErrorKind, ExtractionError};
use schemapdf::domain::ConfigError;

#[test]
fn given_nested_completion_errors_when_classifying_then_maps_each_to_own_kind() {
    let remote = ExtractionError::from(CompletionError::Remote {
        status: 429,
        body: "rate limited".to_string(),
    });
    let empty = ExtractionError::from(CompletionError::EmptyCompletion);
    let transport = ExtractionError::from(CompletionError::Transport("refused".to_string()));

    assert_eq!(remote.kind(), ErrorKind::Remote);
    assert_eq!(empty.kind(), ErrorKind::EmptyCompletion);
    assert_eq!(transport.kind(), ErrorKind::Transport);
}

#[test]
fn given_remote_error_when_reading_status_then_returns_http_status() {
    let error = ExtractionError::from(CompletionError::Remote {
        status: 401,
        body: "bad key".to_string(),
    });

    assert_eq!(error.remote_status(), Some(401));
    assert_eq!(ExtractionError::InvalidPdf.remote_status(), None);
}

#[test]
fn given_local_failures_when_classifying_then_returns_matching_kind() {
    assert_eq!(
        ExtractionError::from(ConfigError::MissingApiKey).kind(),
        ErrorKind::Configuration
    );
    assert_eq!(
        ExtractionError::from(SchemaError::Empty).kind(),
        ErrorKind::InvalidSchema
    );
    assert_eq!(ExtractionError::MissingSource.kind(), ErrorKind::MissingSource);
    assert_eq!(ExtractionError::VisionDisabled.kind(), ErrorKind::VisionDisabled);
}

#[test]
fn given_invalid_pdf_when_displaying_then_mentions_signature() {
    assert!(ExtractionError::InvalidPdf.to_string().contains("PDF signature"));
}
