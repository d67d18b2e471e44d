//! Online/offline provider selection and connectivity notices

#[cfg(test)]
mod tests {
    use crate::common::{DelayedProvider, fast_config, orchestrator_with, request};
    use sign_translate::core::providers::SimulatedRemote;
    use sign_translate::core::types::OFFLINE_WARNING;
    use sign_translate::{Config, ManualConnectivity, NoticeLevel, Orchestrator, OrchestratorState};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_online_translation_with_simulated_remote() {
        let orchestrator = Orchestrator::builder(Config::default())
            .remote(Arc::new(SimulatedRemote::instant()))
            .build()
            .unwrap();
        let sign_writing = orchestrator.watch_sign_writing();
        let video = orchestrator.watch_video_url();

        let result = orchestrator
            .translate(request("Hello world", "ase"))
            .await
            .unwrap();

        assert!((0.0..=1.0).contains(&result.confidence));
        assert!(!result.sign_writing.is_empty());
        assert!(!result.offline);
        assert!(result.translated_text.starts_with("ASL"));
        assert_eq!(orchestrator.state(), OrchestratorState::Translating);
        assert_eq!(sign_writing.borrow().as_deref(), Some(result.sign_writing.as_str()));
        assert_eq!(*video.borrow(), result.video_url);
    }

    #[tokio::test]
    async fn test_offline_translation_is_degraded() {
        let online = DelayedProvider::new(Duration::ZERO);
        let orchestrator = orchestrator_with(
            fast_config(),
            online.clone(),
            Arc::new(ManualConnectivity::offline()),
        );

        let result = orchestrator
            .translate(request("Hello world", "ase"))
            .await
            .unwrap();

        assert!(result.offline);
        assert!(result.video_url.is_none());
        assert!(result.confidence <= 0.6);
        assert_eq!(result.warning.as_deref(), Some(OFFLINE_WARNING));
        assert_eq!(online.calls(), 0);
        // Without a video the session stays in preview
        assert_eq!(orchestrator.state(), OrchestratorState::Preview);
        assert!(!orchestrator.stats().is_online);
    }

    #[tokio::test]
    async fn test_provider_follows_connectivity_changes() {
        let online = DelayedProvider::new(Duration::ZERO);
        let connectivity = Arc::new(ManualConnectivity::online());
        let orchestrator = orchestrator_with(fast_config(), online.clone(), connectivity.clone());
        let mut notices = orchestrator.subscribe_notices();

        connectivity.set_online(false);
        let notice = notices.recv().await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "Offline - Using cached translations");

        let offline = orchestrator.translate(request("Good morning", "ase")).await.unwrap();
        assert!(offline.offline);

        connectivity.set_online(true);
        let notice = notices.recv().await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Connected");

        let online_result = orchestrator.translate(request("Good night", "ase")).await.unwrap();
        assert!(!online_result.offline);
        assert_eq!(online.calls(), 1);
    }

    #[tokio::test]
    async fn test_repeated_connectivity_value_sends_no_notice() {
        let connectivity = Arc::new(ManualConnectivity::online());
        let orchestrator = orchestrator_with(
            fast_config(),
            DelayedProvider::new(Duration::ZERO),
            connectivity.clone(),
        );
        let mut notices = orchestrator.subscribe_notices();

        connectivity.set_online(true);
        tokio::task::yield_now().await;
        assert!(notices.try_recv().is_err());
    }
}
