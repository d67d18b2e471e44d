//! Test fixtures

use sign_translate::core::providers::{OfflineProvider, TranslationProvider};
use sign_translate::{Config, ManualConnectivity, Orchestrator, TranslationRequest};
use std::sync::Arc;

/// Default configuration with millisecond backoff
pub fn fast_config() -> Config {
    let mut config = Config::default();
    config.translator.retry.base_delay_ms = 1;
    config.translator.retry.max_delay_ms = 5;
    config.translator.retry.jitter = false;
    config.translator.provider.request_timeout_ms = 2_000;
    config
}

pub fn request(text: &str, target: &str) -> TranslationRequest {
    TranslationRequest::new(text, "en", target)
}

/// Orchestrator using `online` while connected and the built-in offline
/// provider otherwise
pub fn orchestrator_with(
    config: Config,
    online: Arc<dyn TranslationProvider>,
    connectivity: Arc<ManualConnectivity>,
) -> Arc<Orchestrator> {
    let orchestrator = Orchestrator::builder(config)
        .online(online)
        .offline(Arc::new(OfflineProvider::default()))
        .connectivity(connectivity)
        .build()
        .expect("orchestrator builds");
    Arc::new(orchestrator)
}
