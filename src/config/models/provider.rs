//! Provider configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which remote capability backs the online provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteMode {
    /// Built-in simulated service with artificial latency
    #[default]
    Simulated,
    /// JSON over HTTP against `endpoint`
    Http,
}

impl FromStr for RemoteMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simulated" => Ok(Self::Simulated),
            "http" => Ok(Self::Http),
            other => Err(format!("Unknown provider mode: {}", other)),
        }
    }
}

impl fmt::Display for RemoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulated => write!(f, "simulated"),
            Self::Http => write!(f, "http"),
        }
    }
}

/// Provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub mode: RemoteMode,
    /// Remote translation endpoint, required in `http` mode
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Deadline for a single provider attempt
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Upper bound on offline confidence
    #[serde(default = "default_offline_confidence_ceiling")]
    pub offline_confidence_ceiling: f64,
    #[serde(default = "default_simulated_min_latency_ms")]
    pub simulated_min_latency_ms: u64,
    #[serde(default = "default_simulated_max_latency_ms")]
    pub simulated_max_latency_ms: u64,
    /// Base URL for simulated video links
    #[serde(default)]
    pub video_base_url: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            mode: RemoteMode::default(),
            endpoint: None,
            request_timeout_ms: default_request_timeout_ms(),
            offline_confidence_ceiling: default_offline_confidence_ceiling(),
            simulated_min_latency_ms: default_simulated_min_latency_ms(),
            simulated_max_latency_ms: default_simulated_max_latency_ms(),
            video_base_url: None,
        }
    }
}

impl ProviderSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn simulated_latency(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.simulated_min_latency_ms),
            Duration::from_millis(self.simulated_max_latency_ms),
        )
    }
}
