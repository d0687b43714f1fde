//! Configuration management for the voice form-filling system
//!
//! Supports loading configuration from:
//! - YAML/TOML files under `config/`
//! - Environment variables (`VOICE_FORM` prefix, `__` separator)

mod settings;

pub use settings::{
    load_settings, AsrBackend, AsrConfig, ExtractionSettings, ObservabilityConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
