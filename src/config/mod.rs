//! Configuration management for the translator
//!
//! This module handles loading, validation, and access to all orchestrator
//! configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::ENV_PREFIX;
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, TranslateError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub translator: TranslatorConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TranslateError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let translator: TranslatorConfig = serde_yaml::from_str(content)
            .map_err(|e| TranslateError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { translator };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            translator: TranslatorConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply `SIGN_TRANSLATE_*` overrides on top of this configuration
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.translator.apply_overrides(lookup)?;
        self.validate()?;
        Ok(self)
    }

    pub fn cache(&self) -> &CacheSettings {
        &self.translator.cache
    }

    pub fn retry(&self) -> &RetrySettings {
        &self.translator.retry
    }

    pub fn provider(&self) -> &ProviderSettings {
        &self.translator.provider
    }

    pub fn validation(&self) -> &ValidationSettings {
        &self.translator.validation
    }

    pub fn orchestrator(&self) -> &OrchestratorSettings {
        &self.translator.orchestrator
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        Validate::validate(&self.translator)
            .map_err(|e| TranslateError::Config(format!("Invalid configuration: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.translator).map_err(|e| {
            TranslateError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}

impl From<TranslatorConfig> for Config {
    fn from(translator: TranslatorConfig) -> Self {
        Self { translator }
    }
}
