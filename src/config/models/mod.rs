//! Configuration data models
//!
//! This module defines all configuration structures used by the orchestrator.

pub mod cache;
pub mod orchestrator;
pub mod provider;
pub mod retry;
pub mod validator;

pub use cache::*;
pub use orchestrator::*;
pub use provider::*;
pub use retry::*;
pub use validator::*;

use serde::{Deserialize, Serialize};

/// Root of the translator configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub retry: RetrySettings,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
    #[serde(default)]
    pub orchestrator: OrchestratorSettings,
}

/// Default number of cached translations
pub fn default_max_entries() -> usize {
    100
}

/// Default maximum provider attempts per invocation
pub fn default_max_attempts() -> u32 {
    3
}

pub fn default_base_delay_ms() -> u64 {
    200
}

pub fn default_max_delay_ms() -> u64 {
    5_000
}

pub fn default_backoff_multiplier() -> f64 {
    2.0
}

/// Default provider deadline in milliseconds
pub fn default_request_timeout_ms() -> u64 {
    10_000
}

pub fn default_offline_confidence_ceiling() -> f64 {
    0.6
}

pub fn default_simulated_min_latency_ms() -> u64 {
    1_000
}

pub fn default_simulated_max_latency_ms() -> u64 {
    3_000
}

/// Default maximum text length, in characters
pub fn default_max_text_length() -> usize {
    500
}

pub fn default_denylist() -> Vec<String> {
    vec!["spam".to_string(), "test-inappropriate".to_string()]
}

pub fn default_error_log_capacity() -> usize {
    50
}

pub fn default_event_buffer() -> usize {
    256
}

pub fn default_true() -> bool {
    true
}
