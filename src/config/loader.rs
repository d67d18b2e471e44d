//! Environment variable overrides
//!
//! Every setting can be overridden with a `SIGN_TRANSLATE_*` variable. The
//! lookup is injected so that loading stays a pure function of its input.

use super::models::*;
use crate::utils::error::{Result, TranslateError};
use std::str::FromStr;
use tracing::debug;

/// Prefix shared by every environment variable
pub const ENV_PREFIX: &str = "SIGN_TRANSLATE_";

impl TranslatorConfig {
    /// Build a configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from defaults overridden by `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Override fields whose variable is set
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| {
            let name = format!("{}{}", ENV_PREFIX, suffix);
            lookup(&name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(|value| (name, value))
        };

        if let Some(value) = var("CACHE_MAX_ENTRIES") {
            self.cache.max_entries = parse(value)?;
        }

        if let Some(value) = var("RETRY_MAX_ATTEMPTS") {
            self.retry.max_attempts = parse(value)?;
        }
        if let Some(value) = var("RETRY_BASE_DELAY_MS") {
            self.retry.base_delay_ms = parse(value)?;
        }
        if let Some(value) = var("RETRY_MAX_DELAY_MS") {
            self.retry.max_delay_ms = parse(value)?;
        }
        if let Some(value) = var("RETRY_JITTER") {
            self.retry.jitter = parse(value)?;
        }

        if let Some(value) = var("PROVIDER_MODE") {
            self.provider.mode = parse(value)?;
        }
        if let Some((_, endpoint)) = var("PROVIDER_ENDPOINT") {
            self.provider.endpoint = Some(endpoint);
        }
        if let Some(value) = var("PROVIDER_TIMEOUT_MS") {
            self.provider.request_timeout_ms = parse(value)?;
        }
        if let Some(value) = var("OFFLINE_CONFIDENCE_CEILING") {
            self.provider.offline_confidence_ceiling = parse(value)?;
        }

        if let Some(value) = var("MAX_TEXT_LENGTH") {
            self.validation.max_text_length = parse(value)?;
        }
        if let Some((_, denylist)) = var("DENYLIST") {
            self.validation.denylist = denylist
                .split(',')
                .map(|word| word.trim().to_string())
                .filter(|word| !word.is_empty())
                .collect();
        }

        if let Some(value) = var("AUTO_ADVANCE") {
            self.orchestrator.auto_advance = parse(value)?;
        }

        debug!("Applied environment overrides");
        Ok(())
    }
}

fn parse<T>((name, value): (String, String)) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| TranslateError::Config(format!("Invalid value for {}: {}", name, e)))
}
