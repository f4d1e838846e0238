use schemapdf::infrastructure::observability::log_preview;

#[test]
fn given_empty_text_when_previewing_then_returns_empty_marker() {
    assert_eq!(log_preview(""), "[EMPTY]");
    assert_eq!(log_preview(" \n "), "[EMPTY]");
}

#[test]
fn given_short_text_when_previewing_then_returns_trimmed_text() {
    assert_eq!(log_preview("  {\"total\": 12}  "), "{\"total\": 12}");
}

#[test]
fn given_long_text_when_previewing_then_truncates_with_length() {
    let text = "ü".repeat(150);

    let preview = log_preview(&text);

    assert!(preview.starts_with(&"ü".repeat(100)));
    assert!(preview.ends_with("... (150 chars total)"));
}

#[test]
fn given_bearer_token_when_previewing_then_redacts_token() {
    let preview = log_preview("Authorization: Bearer sk-abc123xyz");

    assert!(preview.contains("Bearer [REDACTED]"));
    assert!(!preview.contains("sk-abc123xyz"));
}

#[test]
fn given_inline_image_when_previewing_then_redacts_payload() {
    let preview = log_preview("{\"url\": \"data:image/png;base64,iVBORw0KGgo\"}");

    assert!(preview.contains("base64,[REDACTED]"));
    assert!(!preview.contains("iVBORw0KGgo"));
}

#[test]
fn given_repeated_secrets_when_previewing_then_redacts_all() {
    let preview = log_preview("api_key=one&api_key=two");

    assert_eq!(preview, "api_key=[REDACTED]&api_key=[REDACTED]");
}
