//! Main settings module

use crate::ConfigError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// ASR capture configuration
    #[serde(default)]
    pub asr: AsrConfig,

    /// Extraction defaults
    #[serde(default)]
    pub extraction: ExtractionSettings,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.asr.sample_rate_hz == 0 {
            return Err(ConfigError::InvalidValue {
                field: "asr.sample_rate_hz".to_string(),
                message: "Sample rate must be non-zero".to_string(),
            });
        }

        if self.asr.record_seconds == 0 || self.asr.record_seconds > 60 {
            return Err(ConfigError::InvalidValue {
                field: "asr.record_seconds".to_string(),
                message: "Capture window must be between 1 and 60 seconds".to_string(),
            });
        }

        // model directories may be downloaded later; warn, don't error
        for (field, path) in [
            ("asr.model_path_en", &self.asr.model_path_en),
            ("asr.model_path_hi", &self.asr.model_path_hi),
        ] {
            if !path.is_empty() && !Path::new(path).exists() {
                tracing::warn!("Model not found: {} = {}", field, path);
            }
        }

        Ok(())
    }
}

/// Which ASR collaborator captures and transcribes audio
///
/// Backend identity selects capture behavior only; extraction behavior
/// is identical across backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AsrBackend {
    /// Cloud recognition
    Google,
    /// Local Whisper model with language detection
    #[default]
    Whisper,
    /// Local Vosk models, one per language
    Vosk,
}

/// ASR capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsrConfig {
    /// Backend to capture with
    #[serde(default)]
    pub backend: AsrBackend,

    /// English model directory (Vosk)
    #[serde(default = "default_model_path_en")]
    pub model_path_en: String,

    /// Hindi model directory (Vosk)
    #[serde(default = "default_model_path_hi")]
    pub model_path_hi: String,

    /// Capture sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate_hz: u32,

    /// Seconds of audio captured per field
    #[serde(default = "default_record_seconds")]
    pub record_seconds: u32,
}

fn default_model_path_en() -> String {
    "models/vosk-model-en-in-0.5".to_string()
}
fn default_model_path_hi() -> String {
    "models/vosk-model-hi-0.22".to_string()
}
fn default_sample_rate() -> u32 {
    16000
}
fn default_record_seconds() -> u32 {
    5
}

impl Default for AsrConfig {
    fn default() -> Self {
        Self {
            backend: AsrBackend::default(),
            model_path_en: default_model_path_en(),
            model_path_hi: default_model_path_hi(),
            sample_rate_hz: default_sample_rate(),
            record_seconds: default_record_seconds(),
        }
    }
}

/// Extraction defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSettings {
    /// Language tag assumed when the backend reports none
    #[serde(default = "default_language")]
    pub default_language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (VOICE_FORM prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder = builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("VOICE_FORM")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
