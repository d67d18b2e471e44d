//! Session state machine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of the current translation session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrchestratorState {
    #[default]
    Idle,
    Loading,
    Preview,
    Translating,
    Error,
}

impl fmt::Display for OrchestratorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Preview => "preview",
            Self::Translating => "translating",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Named events that drive state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    RequestSubmitted,
    RetryRequested,
    CacheHit,
    PoseReceived,
    VideoReceived,
    ValidationFailed,
    ProviderFailed,
    SessionEnded,
}

impl OrchestratorState {
    /// State reached by applying `event`, or `None` when the event is not
    /// valid in the current state
    pub fn next(self, event: SessionEvent) -> Option<Self> {
        use OrchestratorState::*;
        use SessionEvent::*;

        match (self, event) {
            (_, RequestSubmitted | RetryRequested) => Some(Loading),
            (_, SessionEnded) => Some(Idle),
            (Loading, PoseReceived) => Some(Preview),
            (Loading, CacheHit) => Some(Translating),
            (Loading, ValidationFailed | ProviderFailed) => Some(Error),
            (Preview, VideoReceived) => Some(Translating),
            _ => None,
        }
    }

    /// Whether a session in this state is still waiting on work
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Loading | Self::Preview)
    }
}
