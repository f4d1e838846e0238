use std::fmt;

use serde::Deserialize;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEXT_THRESHOLD: usize = 100;
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant that extracts structured data from text. \
Extract the requested information accurately from the provided text.";

/// Raw extractor options as supplied by a caller or a settings file.
///
/// Every field is optional; [`ExtractorConfig::resolve`] applies the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractorSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub text_model: Option<String>,
    #[serde(default)]
    pub vision_model: Option<String>,
    #[serde(default)]
    pub vision_enabled: Option<bool>,
    #[serde(default)]
    pub text_threshold: Option<usize>,
    /// `Some("")` suppresses the system message; `None` uses the default prompt.
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl ExtractorSettings {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("api key is required")]
    MissingApiKey,
}

/// Extractor configuration with every default resolved.
#[derive(Clone)]
pub struct ExtractorConfig {
    api_key: String,
    base_url: String,
    model: String,
    text_model: String,
    vision_model: String,
    vision_enabled: bool,
    text_threshold: usize,
    system_prompt: String,
}

impl ExtractorConfig {
    pub fn resolve(settings: ExtractorSettings) -> Result<Self, ConfigError> {
        let api_key = non_empty(settings.api_key).ok_or(ConfigError::MissingApiKey)?;

        let model = non_empty(settings.model).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = non_empty(settings.base_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let text_model = non_empty(settings.text_model).unwrap_or_else(|| model.clone());
        let vision_model = non_empty(settings.vision_model).unwrap_or_else(|| model.clone());

        Ok(Self {
            api_key,
            base_url,
            model,
            text_model,
            vision_model,
            vision_enabled: settings.vision_enabled.unwrap_or(true),
            text_threshold: settings.text_threshold.unwrap_or(DEFAULT_TEXT_THRESHOLD),
            system_prompt: settings
                .system_prompt
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    pub fn vision_model(&self) -> &str {
        &self.vision_model
    }

    pub fn vision_enabled(&self) -> bool {
        self.vision_enabled
    }

    pub fn text_threshold(&self) -> usize {
        self.text_threshold
    }

    /// Empty when the system message is suppressed.
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

impl fmt::Debug for ExtractorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("text_model", &self.text_model)
            .field("vision_model", &self.vision_model)
            .field("vision_enabled", &self.vision_enabled)
            .field("text_threshold", &self.text_threshold)
            .field("system_prompt", &self.system_prompt)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
