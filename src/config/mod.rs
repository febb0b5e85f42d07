//! Application configuration.
//!
//! Loaded from `config.toml` in the platform config directory, with
//! command line overrides applied on top.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, SessionConfig, UiConfig};
