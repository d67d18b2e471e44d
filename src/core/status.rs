//! Status publishing for external observers
//!
//! Observers pick the channel that fits them:
//!
//! - [`StatusPublisher::subscribe`] delivers every state update in order
//! - [`StatusPublisher::watch`] only exposes the latest update
//! - the SignWriting and video URL watches let the pose and video renderers
//!   react to their own payload independently
//! - notices carry informational messages that are not state changes

use super::orchestrator::OrchestratorState;
use super::types::TranslationResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// Error payload attached to the `error` state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionError {
    /// Human-readable message for the end user
    pub message: String,
    /// Individual failure descriptions (one per violated rule)
    pub details: Vec<String>,
    /// Internal error kind
    pub kind: String,
}

/// One lifecycle update of a session
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    /// Session the update belongs to; 0 before the first request
    pub session: u64,
    pub state: OrchestratorState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Arc<TranslationResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SessionError>,
}

impl StatusUpdate {
    pub fn idle(session: u64) -> Self {
        Self::state(session, OrchestratorState::Idle)
    }

    pub fn state(session: u64, state: OrchestratorState) -> Self {
        Self {
            session,
            state,
            result: None,
            error: None,
        }
    }

    pub fn with_result(mut self, result: Arc<TranslationResult>) -> Self {
        self.result = Some(result);
        self
    }

    pub fn failed(session: u64, error: SessionError) -> Self {
        Self {
            session,
            state: OrchestratorState::Error,
            result: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Informational message for the UI (toasts), outside the state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Fan-out of session state, payload fields and notices
pub struct StatusPublisher {
    events: broadcast::Sender<StatusUpdate>,
    current: watch::Sender<StatusUpdate>,
    sign_writing: watch::Sender<Option<String>>,
    video_url: watch::Sender<Option<String>>,
    notices: broadcast::Sender<Notice>,
}

impl StatusPublisher {
    pub fn new(buffer: usize) -> Self {
        let buffer = buffer.max(1);
        let (events, _) = broadcast::channel(buffer);
        let (current, _) = watch::channel(StatusUpdate::idle(0));
        let (sign_writing, _) = watch::channel(None);
        let (video_url, _) = watch::channel(None);
        let (notices, _) = broadcast::channel(buffer);
        Self {
            events,
            current,
            sign_writing,
            video_url,
            notices,
        }
    }

    /// Publish a state update to every observer
    pub fn publish(&self, update: StatusUpdate) {
        self.current.send_replace(update.clone());
        // No receivers is fine: nobody is listening yet
        let _ = self.events.send(update);
    }

    pub fn publish_sign_writing(&self, value: Option<String>) {
        Self::replace_if_changed(&self.sign_writing, value);
    }

    pub fn publish_video_url(&self, value: Option<String>) {
        Self::replace_if_changed(&self.video_url, value);
    }

    pub fn notify(&self, level: NoticeLevel, message: impl Into<String>) {
        let _ = self.notices.send(Notice {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        });
    }

    pub fn current(&self) -> StatusUpdate {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StatusUpdate> {
        self.events.subscribe()
    }

    pub fn watch(&self) -> watch::Receiver<StatusUpdate> {
        self.current.subscribe()
    }

    pub fn watch_sign_writing(&self) -> watch::Receiver<Option<String>> {
        self.sign_writing.subscribe()
    }

    pub fn watch_video_url(&self) -> watch::Receiver<Option<String>> {
        self.video_url.subscribe()
    }

    pub fn subscribe_notices(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    fn replace_if_changed(sender: &watch::Sender<Option<String>>, value: Option<String>) {
        sender.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }
}

impl Default for StatusPublisher {
    fn default() -> Self {
        Self::new(256)
    }
}
