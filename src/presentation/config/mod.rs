mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{ENV_PREFIX, FALLBACK_API_KEY_VAR, LoggingSettings, Settings};
