//! Orchestrator configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Session behaviour and observer buffers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestratorSettings {
    /// Advance to `preview` and `translating` as soon as the result carries
    /// the matching payload, instead of waiting for renderer callbacks
    #[serde(default = "default_true")]
    pub auto_advance: bool,
    #[serde(default = "default_error_log_capacity")]
    pub error_log_capacity: usize,
    /// Capacity of the status and notice broadcast channels
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            auto_advance: true,
            error_log_capacity: default_error_log_capacity(),
            event_buffer: default_event_buffer(),
        }
    }
}
