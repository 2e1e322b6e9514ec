//! Configuration file support.
//!
//! Settings come from a TOML file (`flightcast.toml`) with serde defaults
//! for every field, so a missing file or an empty one both yield a working
//! configuration. The binary applies `HOST`/`PORT` environment overrides on
//! top of whatever is loaded here.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration file problems.
#[derive(Debug, Error)]
#[error("configuration error: {message}")]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub models: ModelSettings,
    #[serde(default)]
    pub enrichment: EnrichmentSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Model artifact settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Directory holding the exported model artifacts.
    #[serde(default = "default_models_dir")]
    pub dir: PathBuf,
}

/// Weather enrichment settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentSettings {
    /// `"seasonal"` (default) or `"live"`.
    #[serde(default = "default_enrichment_mode")]
    pub mode: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5050
}

fn default_models_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_enrichment_mode() -> String {
    "seasonal".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            dir: default_models_dir(),
        }
    }
}

impl Default for EnrichmentSettings {
    fn default() -> Self {
        Self {
            mode: default_enrichment_mode(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            models: ModelSettings::default(),
            enrichment: EnrichmentSettings::default(),
        }
    }
}

/// How weather features are obtained per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentMode {
    /// Substitute the seasonal profile for the flight month.
    Seasonal,
    /// Fetch real observations through the live clients.
    Live,
}

impl FromStr for EnrichmentMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "seasonal" => Ok(Self::Seasonal),
            "live" => Ok(Self::Live),
            other => Err(format!("unknown enrichment mode '{}'", other)),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("failed to read config file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Load configuration from the first `flightcast.toml` found in the
    /// standard locations (current directory, `config/`, parent directory).
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("flightcast.toml"),
            PathBuf::from("config/flightcast.toml"),
            PathBuf::from("../flightcast.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::new(
            "no flightcast.toml found in standard locations",
        ))
    }

    /// Parse the configured enrichment mode.
    pub fn enrichment_mode(&self) -> Result<EnrichmentMode, ConfigError> {
        EnrichmentMode::from_str(&self.enrichment.mode).map_err(ConfigError::new)
    }
}
