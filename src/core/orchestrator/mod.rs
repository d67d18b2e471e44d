//! Translation request orchestration
//!
//! The [`Orchestrator`] owns one session at a time. Submitting a request
//! supersedes the current session, validates the request, serves it from the
//! cache when possible and otherwise joins or starts a single-flight provider
//! invocation with retry and deadline protection.
//!
//! Every state change is published while the session lock is held, so a
//! superseding `loading` update always reaches observers before anything the
//! superseded session could still produce, and that late output is dropped.

mod builder;
mod insights;
pub mod single_flight;
pub mod state;
pub mod telemetry;

pub use builder::OrchestratorBuilder;
pub use insights::{DEFAULT_HISTORY_LIMIT, TranslationStats};
pub use state::{OrchestratorState, SessionEvent};
pub use telemetry::{ErrorLog, ErrorRecord};

use self::single_flight::{FlightOutcome, Joined, SingleFlight};
use crate::config::Config;
use crate::core::cache_manager::{CacheKey, ResultCache};
use crate::core::connectivity::ConnectivityMonitor;
use crate::core::providers::{ProviderError, TranslationProvider};
use crate::core::status::{Notice, NoticeLevel, SessionError, StatusPublisher, StatusUpdate};
use crate::core::types::{PreparedRequest, TranslationRequest, TranslationResult};
use crate::core::validator::{Validator, normalize_request};
use crate::utils::error::{Result, RetryPolicy, TimeoutWrapper, TranslateError};
use chrono::Utc;
use futures::FutureExt;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

/// The current session and what it needs for `retry()`
#[derive(Debug, Default)]
struct Session {
    id: u64,
    state: OrchestratorState,
    /// Last submitted request, with normalized language codes
    request: Option<TranslationRequest>,
    /// Whether `request` already passed validation
    validated: bool,
    result: Option<Arc<TranslationResult>>,
}

/// Coordinates validation, caching, provider selection and status publishing
pub struct Orchestrator {
    validator: Validator,
    cache: Arc<ResultCache>,
    online: Arc<dyn TranslationProvider>,
    offline: Arc<dyn TranslationProvider>,
    connectivity: Arc<dyn ConnectivityMonitor>,
    publisher: Arc<StatusPublisher>,
    flights: Arc<SingleFlight>,
    retry: RetryPolicy,
    deadline: TimeoutWrapper,
    session: Mutex<Session>,
    errors: ErrorLog,
    auto_advance: bool,
    listener: JoinHandle<()>,
}

impl Orchestrator {
    pub fn builder(config: Config) -> OrchestratorBuilder {
        OrchestratorBuilder::new(config)
    }

    /// Translate a request as a new session, superseding the current one.
    ///
    /// Returns [`TranslateError::Superseded`] when another request replaced
    /// this session before it finished.
    pub async fn translate(&self, request: TranslationRequest) -> Result<TranslationResult> {
        let request = normalize_request(&request);
        let session = self.begin(request.clone(), false, SessionEvent::RequestSubmitted);
        info!(
            session,
            source_language = %request.source_language,
            target_language = %request.target_language,
            "Translation requested"
        );
        self.run(session, request, true).await
    }

    /// Re-submit the last request as a new session.
    ///
    /// Validation is skipped when the request already passed it.
    pub async fn retry(&self) -> Result<TranslationResult> {
        let (request, validated) = {
            let slot = self.session.lock();
            match &slot.request {
                Some(request) => (request.clone(), slot.validated),
                None => return Err(TranslateError::NoPreviousRequest),
            }
        };

        let session = self.begin(request.clone(), validated, SessionEvent::RetryRequested);
        info!(session, "Retrying last translation request");
        self.run(session, request, !validated).await
    }

    /// Report that the pose renderer displayed the SignWriting of `session`.
    ///
    /// Returns false when the session is stale or the event does not apply.
    pub fn pose_received(&self, session: u64) -> bool {
        self.apply_external(session, SessionEvent::PoseReceived)
    }

    /// Report that the video player loaded the video of `session`
    pub fn video_received(&self, session: u64) -> bool {
        self.apply_external(session, SessionEvent::VideoReceived)
    }

    /// Return to `idle`; the last request stays available to `retry()`
    pub fn end_session(&self) {
        let mut slot = self.session.lock();
        slot.result = None;
        self.publisher.publish_sign_writing(None);
        self.publisher.publish_video_url(None);
        self.transition(&mut slot, SessionEvent::SessionEnded, None);
    }

    /// Drop every cached translation
    pub fn clear_cache(&self) {
        self.cache.clear();
        self.publisher
            .notify(NoticeLevel::Info, "Translation cache cleared");
    }

    pub fn state(&self) -> OrchestratorState {
        self.session.lock().state
    }

    /// Identifier of the current session; 0 before the first request
    pub fn session_id(&self) -> u64 {
        self.session.lock().id
    }

    pub fn is_online(&self) -> bool {
        self.connectivity.is_online()
    }

    /// Ordered stream of every state update
    pub fn subscribe(&self) -> broadcast::Receiver<StatusUpdate> {
        self.publisher.subscribe()
    }

    /// Latest state update
    pub fn watch_status(&self) -> watch::Receiver<StatusUpdate> {
        self.publisher.watch()
    }

    pub fn watch_sign_writing(&self) -> watch::Receiver<Option<String>> {
        self.publisher.watch_sign_writing()
    }

    pub fn watch_video_url(&self) -> watch::Receiver<Option<String>> {
        self.publisher.watch_video_url()
    }

    pub fn subscribe_notices(&self) -> broadcast::Receiver<Notice> {
        self.publisher.subscribe_notices()
    }

    fn begin(&self, request: TranslationRequest, validated: bool, event: SessionEvent) -> u64 {
        let mut slot = self.session.lock();
        if slot.state.is_busy() {
            debug!(session = slot.id, "Superseding active session");
        }
        slot.id += 1;
        slot.request = Some(request);
        slot.validated = validated;
        slot.result = None;
        self.publisher.publish_sign_writing(None);
        self.publisher.publish_video_url(None);
        self.transition(&mut slot, event, None);
        slot.id
    }

    async fn run(
        &self,
        session: u64,
        request: TranslationRequest,
        validate: bool,
    ) -> Result<TranslationResult> {
        if validate {
            if let Err(errors) = self.validator.validate(&request) {
                return Err(self.fail(
                    session,
                    &request,
                    TranslateError::Validation(errors),
                    SessionEvent::ValidationFailed,
                ));
            }
            self.mark_validated(session);
        }

        let prepared = self.validator.prepare(&request);
        let key = CacheKey::from_request(&prepared);

        if let Some(result) = self.cache.get(&key) {
            return self.deliver(session, result, true);
        }

        let outcome = match self
            .flights
            .join_or_start(key, &self.cache, || self.invocation(prepared))
        {
            Joined::Cached(result) => return self.deliver(session, result, true),
            Joined::Pending { flight, leader } => {
                if !leader {
                    debug!(session, "Waiting on shared provider invocation");
                }
                flight.await
            }
        };

        match outcome {
            Ok(result) => self.deliver(session, result, false),
            Err(err) => Err(self.fail(
                session,
                &request,
                TranslateError::Provider(err),
                SessionEvent::ProviderFailed,
            )),
        }
    }

    /// Provider invocation for a cache miss, run on its own task by the
    /// single-flight registry.
    ///
    /// The provider is picked from connectivity when the invocation starts.
    fn invocation(&self, request: PreparedRequest) -> BoxFuture<'static, FlightOutcome> {
        let provider = if self.connectivity.is_online() {
            Arc::clone(&self.online)
        } else {
            Arc::clone(&self.offline)
        };
        let retry = self.retry.clone();
        let deadline = self.deadline;
        debug!(provider = provider.name(), "Starting provider invocation");

        async move {
            let name = provider.name();
            retry
                .call_with_hint(
                    || deadline.call_provider(name, provider.invoke(&request)),
                    ProviderError::is_retryable,
                    |err: &ProviderError| err.retry_delay().map(Duration::from_secs),
                )
                .await
                .map(TranslationResult::with_quality_warning)
        }
        .boxed()
    }

    fn mark_validated(&self, session: u64) {
        let mut slot = self.session.lock();
        if slot.id == session {
            slot.validated = true;
        }
    }

    /// Publish a result for `session` and drive the payload transitions
    fn deliver(
        &self,
        session: u64,
        result: TranslationResult,
        cached: bool,
    ) -> Result<TranslationResult> {
        let mut slot = self.session.lock();
        if slot.id != session {
            debug!(session, current = slot.id, "Dropping result of superseded session");
            return Err(TranslateError::Superseded { session });
        }

        let result = Arc::new(result);
        slot.result = Some(Arc::clone(&result));

        if result.has_pose() {
            self.publisher
                .publish_sign_writing(Some(result.sign_writing.clone()));
        }
        if result.has_video() {
            self.publisher.publish_video_url(result.video_url.clone());
        }

        let advanced = if cached {
            self.transition(&mut slot, SessionEvent::CacheHit, None)
        } else if self.auto_advance && result.has_pose() {
            let preview = self.transition(&mut slot, SessionEvent::PoseReceived, None);
            let video =
                result.has_video() && self.transition(&mut slot, SessionEvent::VideoReceived, None);
            preview || video
        } else {
            false
        };

        if !advanced {
            // Result is available but the renderers have not reported back yet
            self.publisher.publish(
                StatusUpdate::state(session, slot.state).with_result(Arc::clone(&result)),
            );
        }

        info!(
            session,
            cached,
            offline = result.offline,
            confidence = result.confidence,
            state = %slot.state,
            "Translation delivered"
        );
        Ok(TranslationResult::clone(&result))
    }

    /// Record a failure and move `session` to `error` when still current
    fn fail(
        &self,
        session: u64,
        request: &TranslationRequest,
        err: TranslateError,
        event: SessionEvent,
    ) -> TranslateError {
        self.errors.record(ErrorRecord {
            id: Uuid::new_v4(),
            session,
            kind: err.kind().to_string(),
            message: err.to_string(),
            request: request.clone(),
            online: self.connectivity.is_online(),
            timestamp: Utc::now(),
        });

        let mut slot = self.session.lock();
        if slot.id != session {
            debug!(session, current = slot.id, "Dropping failure of superseded session");
            return TranslateError::Superseded { session };
        }

        let error = SessionError {
            message: err.user_message(),
            details: err.details(),
            kind: err.kind().to_string(),
        };
        self.transition(&mut slot, event, Some(error));
        err
    }

    fn apply_external(&self, session: u64, event: SessionEvent) -> bool {
        let mut slot = self.session.lock();
        if slot.id != session {
            debug!(session, current = slot.id, ?event, "Ignoring event for stale session");
            return false;
        }

        // Renderers can only report a payload the session has delivered
        let available = match (&slot.result, event) {
            (Some(result), SessionEvent::PoseReceived) => result.has_pose(),
            (Some(result), SessionEvent::VideoReceived) => result.has_video(),
            (None, _) => false,
            _ => true,
        };
        if !available {
            debug!(session, ?event, "Ignoring event without a delivered payload");
            return false;
        }
        self.transition(&mut slot, event, None)
    }

    /// Apply `event` to the locked session and publish the new state
    fn transition(
        &self,
        slot: &mut Session,
        event: SessionEvent,
        error: Option<SessionError>,
    ) -> bool {
        let Some(next) = slot.state.next(event) else {
            debug!(session = slot.id, state = %slot.state, ?event, "Ignoring event");
            return false;
        };

        debug!(session = slot.id, from = %slot.state, to = %next, ?event, "State transition");
        slot.state = next;

        let update = match error {
            Some(error) => StatusUpdate::failed(slot.id, error),
            None => {
                let update = StatusUpdate::state(slot.id, next);
                match &slot.result {
                    Some(result) => update.with_result(Arc::clone(result)),
                    None => update,
                }
            }
        };
        self.publisher.publish(update);
        true
    }
}

impl Drop for Orchestrator {
    fn drop(&mut self) {
        self.listener.abort();
    }
}
