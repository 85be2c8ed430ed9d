//! Configuration file support.
//!
//! This module reads service configuration from TOML files. Every section
//! and key is optional.
//!
//! ```toml
//! [model]
//! source = "linear_model.json"
//! timeout_secs = 20
//!
//! [prediction]
//! day_offset = "instant"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::error::{FareError, FareResult};
use crate::io::loaders::DEFAULT_FETCH_TIMEOUT_SECS;
use crate::io::{ModelLoader, ModelSource};
use crate::time::DayOffsetMode;

/// Service configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FareConfig {
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub prediction: PredictionSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Model location settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model_source")]
    pub source: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Prediction settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionSettings {
    #[serde(default)]
    pub day_offset: DayOffsetMode,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_model_source() -> String {
    "linear_model.json".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            source: default_model_source(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl FareConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> FareResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            FareError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> FareResult<Self> {
        toml::from_str(content).map_err(|e| {
            FareError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `fare.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when no file exists.
    pub fn from_default_location() -> FareResult<Self> {
        let search_paths = [
            PathBuf::from("fare.toml"),
            PathBuf::from("rust_backend/fare.toml"),
            PathBuf::from("../fare.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::debug!("No fare.toml found, using defaults");
        Ok(Self::default())
    }

    /// Apply `FARE_MODEL`, `HOST` and `PORT` overrides.
    pub fn apply_env(&mut self) -> FareResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> FareResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup("FARE_MODEL") {
            self.model.source = source;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|e| {
                FareError::Configuration(format!("Invalid PORT {:?}: {}", port, e))
            })?;
        }
        Ok(())
    }

    pub fn model_source(&self) -> FareResult<ModelSource> {
        self.model.source.parse()
    }

    pub fn model_loader(&self) -> ModelLoader {
        ModelLoader::new(Duration::from_secs(self.model.timeout_secs))
    }
}
