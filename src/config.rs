//! Configuration resolution for survey-processor
//!
//! TOML file with environment-variable overrides, resolved once at
//! startup. The file is optional; every field has a usable default for
//! local development.
//!
//! Environment overrides:
//! - `SURVEY_CONFIG`          path to the TOML file
//! - `SURVEY_BIND_ADDRESS`    listen address
//! - `SURVEY_DATABASE_PATH`   SQLite database file
//! - `SURVEY_TEMPLATES_DIR`   directory holding the prompt templates
//! - `SURVEY_MODEL_ENDPOINT`  text-generation inference endpoint

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "survey-processor.toml";

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// SQLite database file
    pub database_path: PathBuf,
    /// Directory holding the two hair templates and the system prompt
    pub templates_dir: PathBuf,
    /// Text-generation inference endpoint
    pub model_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            database_path: PathBuf::from("survey.db"),
            templates_dir: PathBuf::from("templates"),
            model_endpoint: "http://127.0.0.1:8080/generate".to_string(),
        }
    }
}

impl Config {
    /// Load configuration: TOML file (if present), then env overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var("SURVEY_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var("SURVEY_BIND_ADDRESS") {
            self.bind_address = addr;
        }
        if let Ok(path) = std::env::var("SURVEY_DATABASE_PATH") {
            self.database_path = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var("SURVEY_TEMPLATES_DIR") {
            self.templates_dir = PathBuf::from(dir);
        }
        if let Ok(endpoint) = std::env::var("SURVEY_MODEL_ENDPOINT") {
            self.model_endpoint = endpoint;
        }
    }
}
