use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `<config_dir>/partorder/config.toml` via `dirs::config_dir()`,
    /// falling back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("partorder").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API base URL is an http(s) URL
    /// - Timeouts, page size and timer intervals are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url '{}' must start with http:// or https://", base_url),
            });
        }

        let zero_checks = [
            ("api.timeout_seconds", u64::from(self.api.timeout_seconds)),
            ("ui.page_size", u64::from(self.ui.page_size)),
            ("ui.slider_interval_ms", self.ui.slider_interval_ms),
            ("ui.tick_rate_ms", self.ui.tick_rate_ms),
        ];
        for (name, value) in zero_checks {
            if value == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be greater than zero", name),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[api]
base_url = "http://192.168.40.42:8000/api"
"#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://192.168.40.42:8000/api");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.ui.page_size, 20);
        assert_eq!(config.ui.slider_interval_ms, 3000);
        assert!(config.session.path.is_none());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn rejects_zero_page_size() {
        let mut config = Config::default();
        config.ui.page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ui.page_size"));
    }
}
