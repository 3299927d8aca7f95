//! Configuration for reliefwatch
//!
//! All configuration is explicit: clients receive their config at construction
//! time, and environment variables are consulted only inside the loader.

mod loader;

pub use loader::{DEFAULT_CONFIG_FILE, load_config};

use serde::{Deserialize, Serialize};

use crate::llm::LlmConfig;
use crate::reliefweb::ReliefWebConfig;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ReliefWeb client configuration
    pub reliefweb: ReliefWebConfig,
    /// Chat-model configuration
    pub llm: LlmConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.reliefweb.base_url, "https://api.reliefweb.int/v1");
        assert_eq!(config.llm.model, "mistral-large-latest");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"llm": {"model": "mistral-small-latest"}}"#).unwrap();
        assert_eq!(config.llm.model, "mistral-small-latest");
        assert_eq!(config.llm.base_url, "https://api.mistral.ai/v1");
        assert_eq!(config.reliefweb.appname, "reliefwatch");
    }
}
