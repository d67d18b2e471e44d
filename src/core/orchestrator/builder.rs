//! Orchestrator construction

use super::{ErrorLog, Orchestrator, Session};
use super::single_flight::SingleFlight;
use crate::config::{Config, ProviderSettings, RemoteMode};
use crate::core::cache_manager::ResultCache;
use crate::core::connectivity::{ConnectivityChanges, ConnectivityMonitor, ManualConnectivity};
use crate::core::providers::{
    HttpRemoteTranslator, OfflineProvider, OnlineProvider, RemoteTranslator, SimulatedRemote,
    TranslationProvider,
};
use crate::core::status::{NoticeLevel, StatusPublisher};
use crate::core::validator::Validator;
use crate::utils::error::{Result, RetryConfig, RetryPolicy, TimeoutWrapper, TranslateError};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio_stream::StreamExt;
use tracing::{info, warn};

/// Builder for [`Orchestrator`]; anything not injected is created from the
/// configuration
pub struct OrchestratorBuilder {
    config: Config,
    online: Option<Arc<dyn TranslationProvider>>,
    remote: Option<Arc<dyn RemoteTranslator>>,
    offline: Option<Arc<dyn TranslationProvider>>,
    connectivity: Option<Arc<dyn ConnectivityMonitor>>,
}

impl OrchestratorBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            online: None,
            remote: None,
            offline: None,
            connectivity: None,
        }
    }

    /// Provider used while online
    pub fn online(mut self, provider: Arc<dyn TranslationProvider>) -> Self {
        self.online = Some(provider);
        self
    }

    /// Remote capability wrapped by the default online provider
    pub fn remote(mut self, remote: Arc<dyn RemoteTranslator>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Provider used while offline
    pub fn offline(mut self, provider: Arc<dyn TranslationProvider>) -> Self {
        self.offline = Some(provider);
        self
    }

    pub fn connectivity(mut self, monitor: Arc<dyn ConnectivityMonitor>) -> Self {
        self.connectivity = Some(monitor);
        self
    }

    /// Build the orchestrator and start its connectivity listener.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn build(self) -> Result<Orchestrator> {
        let runtime = Handle::try_current().map_err(|_| {
            TranslateError::config("Orchestrator must be built inside a Tokio runtime")
        })?;
        self.config.validate()?;

        let settings = &self.config.translator;

        let online: Arc<dyn TranslationProvider> = match (self.online, self.remote) {
            (Some(provider), _) => provider,
            (None, Some(remote)) => Arc::new(OnlineProvider::new(remote)),
            (None, None) => Arc::new(OnlineProvider::new(default_remote(&settings.provider)?)),
        };
        let offline: Arc<dyn TranslationProvider> = match self.offline {
            Some(provider) => provider,
            None => Arc::new(OfflineProvider::new(
                settings.provider.offline_confidence_ceiling,
            )),
        };
        let connectivity: Arc<dyn ConnectivityMonitor> = match self.connectivity {
            Some(monitor) => monitor,
            None => Arc::new(ManualConnectivity::online()),
        };

        let publisher = Arc::new(StatusPublisher::new(settings.orchestrator.event_buffer));
        let listener = runtime.spawn(watch_connectivity(
            connectivity.changes(),
            Arc::clone(&publisher),
        ));

        info!(
            online = online.name(),
            offline = offline.name(),
            cache_entries = settings.cache.max_entries,
            max_attempts = settings.retry.max_attempts,
            "Orchestrator ready"
        );

        Ok(Orchestrator {
            validator: Validator::new(&settings.validation),
            cache: Arc::new(ResultCache::from_settings(&settings.cache)?),
            online,
            offline,
            connectivity,
            publisher,
            flights: Arc::new(SingleFlight::new()),
            retry: RetryPolicy::new(RetryConfig::from(&settings.retry)),
            deadline: TimeoutWrapper::new(settings.provider.request_timeout()),
            session: Mutex::new(Session::default()),
            errors: ErrorLog::new(settings.orchestrator.error_log_capacity),
            auto_advance: settings.orchestrator.auto_advance,
            listener,
        })
    }
}

/// Remote capability selected by the provider mode
fn default_remote(settings: &ProviderSettings) -> Result<Arc<dyn RemoteTranslator>> {
    match settings.mode {
        RemoteMode::Simulated => {
            let (min, max) = settings.simulated_latency();
            let mut remote = SimulatedRemote::new(min, max);
            if let Some(base) = &settings.video_base_url {
                remote = remote.with_video_base_url(base.clone());
            }
            Ok(Arc::new(remote))
        }
        RemoteMode::Http => {
            let endpoint = settings.endpoint.as_deref().ok_or_else(|| {
                TranslateError::config("provider.endpoint is required in http mode")
            })?;
            Ok(Arc::new(HttpRemoteTranslator::new(
                endpoint,
                settings.request_timeout(),
            )?))
        }
    }
}

/// Turn connectivity transitions into user notices
async fn watch_connectivity(mut changes: ConnectivityChanges, publisher: Arc<StatusPublisher>) {
    while let Some(online) = changes.next().await {
        if online {
            info!("Connection restored");
            publisher.notify(NoticeLevel::Success, "Connected");
        } else {
            warn!("Connection lost, falling back to offline translation");
            publisher.notify(NoticeLevel::Warning, "Offline - Using cached translations");
        }
    }
}
