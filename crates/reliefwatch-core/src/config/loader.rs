//! Configuration loading
//!
//! Reads an optional JSON config file and applies environment overrides.
//! This is the only place the crate touches the process environment.

use std::path::Path;

use crate::error::{ReliefError, ReliefResult};

use super::Config;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "reliefwatch.json";

/// Load configuration.
///
/// With an explicit path the file must exist; without one, the default file is
/// used when present and built-in defaults otherwise. `MISTRAL_API_KEY` and
/// `RELIEFWEB_APPNAME` environment variables override the file values.
pub fn load_config(path: Option<&Path>) -> ReliefResult<Config> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                read_config_file(default)?
            } else {
                Config::default()
            }
        }
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

fn read_config_file(path: &Path) -> ReliefResult<Config> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ReliefError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&contents)
        .map_err(|e| ReliefError::config(format!("Failed to parse {}: {}", path.display(), e)))
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = std::env::var("MISTRAL_API_KEY") {
        if !key.is_empty() {
            config.llm.api_key = Some(key);
        }
    }
    if let Ok(appname) = std::env::var("RELIEFWEB_APPNAME") {
        if !appname.is_empty() {
            config.reliefweb.appname = appname;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"reliefweb": {{"appname": "myapp"}}, "logging": {{"level": "debug"}}}}"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.reliefweb.appname, "myapp");
        assert_eq!(config.logging.level, "debug");
        // Untouched sections keep their defaults
        assert_eq!(config.llm.model, "mistral-large-latest");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/reliefwatch.json")));
        assert!(matches!(result, Err(ReliefError::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = load_config(Some(file.path()));
        assert!(matches!(result, Err(ReliefError::Config(_))));
    }
}
