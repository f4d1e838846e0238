use schemapdf::domain::{
    ConfigError, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, DEFAULT_TEXT_THRESHOLD,
    ExtractorConfig, ExtractorSettings,
};

#[test]
fn given_only_api_key_when_resolving_then_applies_defaults() {
    let config = ExtractorConfig::resolve(ExtractorSettings::with_api_key("sk-test")).unwrap();

    assert_eq!(config.api_key(), "sk-test");
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.model(), DEFAULT_MODEL);
    assert_eq!(config.text_model(), DEFAULT_MODEL);
    assert_eq!(config.vision_model(), DEFAULT_MODEL);
    assert!(config.vision_enabled());
    assert_eq!(config.text_threshold(), DEFAULT_TEXT_THRESHOLD);
    assert_eq!(config.system_prompt(), DEFAULT_SYSTEM_PROMPT);
}

#[test]
fn given_no_api_key_when_resolving_then_returns_missing_api_key() {
    let result = ExtractorConfig::resolve(ExtractorSettings::default());
    assert!(matches!(result, Err(ConfigError::MissingApiKey)));
}

#[test]
fn given_blank_api_key_when_resolving_then_returns_missing_api_key() {
    let result = ExtractorConfig::resolve(ExtractorSettings::with_api_key("   "));
    assert!(matches!(result, Err(ConfigError::MissingApiKey)));
}

#[test]
fn given_shared_model_when_resolving_then_text_and_vision_inherit_it() {
    let settings = ExtractorSettings {
        model: Some("gpt-4o".to_string()),
        vision_model: Some("gpt-4o-vision".to_string()),
        ..ExtractorSettings::with_api_key("sk-test")
    };

    let config = ExtractorConfig::resolve(settings).unwrap();

    assert_eq!(config.model(), "gpt-4o");
    assert_eq!(config.text_model(), "gpt-4o");
    assert_eq!(config.vision_model(), "gpt-4o-vision");
}

#[test]
fn given_base_url_with_trailing_slash_when_resolving_then_slash_is_trimmed() {
    let settings = ExtractorSettings {
        base_url: Some("http://localhost:1234/v1/".to_string()),
        ..ExtractorSettings::with_api_key("sk-test")
    };

    let config = ExtractorConfig::resolve(settings).unwrap();

    assert_eq!(config.base_url(), "http://localhost:1234/v1");
}

#[test]
fn given_empty_system_prompt_when_resolving_then_prompt_stays_empty() {
    let settings = ExtractorSettings {
        system_prompt: Some(String::new()),
        ..ExtractorSettings::with_api_key("sk-test")
    };

    let config = ExtractorConfig::resolve(settings).unwrap();

    assert_eq!(config.system_prompt(), "");
}

#[test]
fn given_overrides_when_resolving_then_threshold_and_vision_flag_are_kept() {
    let settings = ExtractorSettings {
        vision_enabled: Some(false),
        text_threshold: Some(0),
        ..ExtractorSettings::with_api_key("sk-test")
    };

    let config = ExtractorConfig::resolve(settings).unwrap();

    assert!(!config.vision_enabled());
    assert_eq!(config.text_threshold(), 0);
}

#[test]
fn given_resolved_config_when_debug_formatting_then_api_key_is_hidden() {
    let config = ExtractorConfig::resolve(ExtractorSettings::with_api_key("sk-secret")).unwrap();

    let debug = format!("{config:?}");

    assert!(!debug.contains("sk-secret"));
}
