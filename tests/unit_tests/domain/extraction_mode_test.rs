use schemapdf::domain::ExtractionMode;

#[test]
fn given_text_at_threshold_when_selecting_mode_then_returns_text() {
    let text = "a".repeat(100);
    assert_eq!(ExtractionMode::select(&text, 100), ExtractionMode::Text);
}

#[test]
fn given_text_one_below_threshold_when_selecting_mode_then_needs_vision() {
    let text = "a".repeat(99);
    assert_eq!(ExtractionMode::select(&text, 100), ExtractionMode::NeedsVision);
}

#[test]
fn given_padding_around_short_text_when_selecting_mode_then_padding_is_ignored() {
    let text = format!("   {}\n\n\t", "a".repeat(99));
    assert_eq!(ExtractionMode::select(&text, 100), ExtractionMode::NeedsVision);
}

#[test]
fn given_whitespace_only_text_when_selecting_mode_then_needs_vision() {
    assert_eq!(ExtractionMode::select("  \n\t ", 0), ExtractionMode::NeedsVision);
    assert_eq!(ExtractionMode::select("", 0), ExtractionMode::NeedsVision);
}

#[test]
fn given_zero_threshold_when_text_is_present_then_returns_text() {
    assert_eq!(ExtractionMode::select("x", 0), ExtractionMode::Text);
}

#[test]
fn given_multibyte_text_when_selecting_mode_then_counts_characters() {
    let text = "é".repeat(100);
    assert_eq!(ExtractionMode::select(&text, 100), ExtractionMode::Text);
}

#[test]
fn given_modes_when_naming_then_returns_log_labels() {
    assert_eq!(ExtractionMode::Text.as_str(), "text");
    assert_eq!(ExtractionMode::NeedsVision.as_str(), "vision");
}
