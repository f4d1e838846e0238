use config::{Config, ConfigError, Environment as EnvironmentSource, File, Map};
use serde::Deserialize;

use crate::domain::ExtractorSettings;

use super::Environment;

pub const ENV_PREFIX: &str = "SCHEMAPDF";
pub const FALLBACK_API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub extractor: ExtractorSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub json: bool,
}

impl Settings {
    /// `schemapdf.<env>.{toml,yaml,json}` if present, then `SCHEMAPDF_*` variables
    /// (`SCHEMAPDF_EXTRACTOR__MODEL=gpt-4o`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| {
                Some((key.into_string().ok()?, value.into_string().ok()?))
            })
            .collect();
        Self::load_from(environment, vars)
    }

    /// Same as [`Settings::load`] with an explicit variable set instead of the
    /// process environment.
    pub fn load_from(
        environment: Environment,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let fallback_api_key = vars
            .get(FALLBACK_API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .cloned();

        let mut settings: Settings = Config::builder()
            .add_source(
                File::with_name(&format!("schemapdf.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .build()?
            .try_deserialize()?;

        let has_api_key = settings
            .extractor
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty());
        if !has_api_key {
            settings.extractor.api_key = fallback_api_key;
        }

        Ok(settings)
    }
}
