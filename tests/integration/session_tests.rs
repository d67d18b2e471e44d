//! Session lifecycle as seen by observers

#[cfg(test)]
mod tests {
    use crate::common::{
        DelayedProvider, GatedProvider, drain, fast_config, orchestrator_with, request, wait_until,
    };
    use sign_translate::{LanguageKind, ManualConnectivity, OrchestratorState};
    use std::sync::Arc;
    use std::time::Duration;

    fn orchestrator() -> Arc<sign_translate::Orchestrator> {
        orchestrator_with(
            fast_config(),
            DelayedProvider::new(Duration::ZERO),
            Arc::new(ManualConnectivity::online()),
        )
    }

    #[tokio::test]
    async fn test_successful_session_publishes_every_state_in_order() {
        let orchestrator = orchestrator();
        let mut updates = orchestrator.subscribe();
        assert_eq!(orchestrator.state(), OrchestratorState::Idle);

        let result = orchestrator.translate(request("Hello world", "ase")).await.unwrap();

        let updates = drain(&mut updates);
        let states: Vec<_> = updates.iter().map(|u| u.state).collect();
        assert_eq!(
            states,
            vec![
                OrchestratorState::Loading,
                OrchestratorState::Preview,
                OrchestratorState::Translating,
            ]
        );
        assert!(updates.iter().all(|u| u.session == 1));
        assert!(updates[0].result.is_none());
        assert_eq!(updates[2].result.as_deref(), Some(&result));
    }

    #[tokio::test]
    async fn test_renderer_callbacks_before_delivery_are_ignored() {
        let provider = GatedProvider::new();
        let orchestrator = orchestrator_with(
            fast_config(),
            provider.clone(),
            Arc::new(ManualConnectivity::online()),
        );
        let mut updates = orchestrator.subscribe();

        let pending = tokio::spawn({
            let orchestrator = Arc::clone(&orchestrator);
            async move { orchestrator.translate(request("Hello world", "ase")).await }
        });
        wait_until(|| provider.calls() == 1).await;
        let session = orchestrator.session_id();

        assert!(!orchestrator.pose_received(session));
        assert!(!orchestrator.video_received(session));
        assert_eq!(orchestrator.state(), OrchestratorState::Loading);
        assert!(orchestrator.watch_sign_writing().borrow().is_none());

        provider.release(1);
        pending.await.unwrap().unwrap();

        let states: Vec<_> = drain(&mut updates).iter().map(|u| u.state).collect();
        assert_eq!(
            states,
            vec![
                OrchestratorState::Loading,
                OrchestratorState::Preview,
                OrchestratorState::Translating,
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_text_goes_straight_to_error() {
        let orchestrator = orchestrator();
        let mut updates = orchestrator.subscribe();

        assert!(orchestrator.translate(request("", "ase")).await.is_err());

        let updates = drain(&mut updates);
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1].state, OrchestratorState::Error);
        let error = updates[1].error.as_ref().unwrap();
        assert_eq!(error.details, vec!["text required".to_string()]);
        assert_eq!(error.message, "Please check your input: text required.");
    }

    #[tokio::test]
    async fn test_all_violations_are_reported_together() {
        let orchestrator = orchestrator();

        assert!(orchestrator.translate(request(&"a".repeat(501), "xx")).await.is_err());

        let status = orchestrator.watch_status().borrow().clone();
        let error = status.error.unwrap();
        assert_eq!(error.details.len(), 2);
        assert_eq!(error.message, "Please check your input and try again.");
    }

    #[tokio::test]
    async fn test_payload_channels_reset_on_new_session() {
        let orchestrator = orchestrator();
        let sign_writing = orchestrator.watch_sign_writing();
        let video = orchestrator.watch_video_url();

        orchestrator.translate(request("Hello", "ase")).await.unwrap();
        assert!(sign_writing.borrow().is_some());
        assert!(video.borrow().is_some());

        assert!(orchestrator.translate(request("", "ase")).await.is_err());
        assert!(sign_writing.borrow().is_none());
        assert!(video.borrow().is_none());

        orchestrator.end_session();
        assert_eq!(orchestrator.state(), OrchestratorState::Idle);
        assert_eq!(orchestrator.watch_status().borrow().state, OrchestratorState::Idle);
    }

    #[tokio::test]
    async fn test_language_catalogue() {
        let orchestrator = orchestrator();

        let languages = orchestrator.supported_languages();
        assert_eq!(languages.spoken.len(), 10);
        assert_eq!(languages.sign.len(), 5);
        assert!(languages.sign.iter().any(|l| l.code == "ase"));

        let info = orchestrator.language_info("gsl", LanguageKind::Sign);
        assert_eq!(info.code, "gsg");
        assert!(info.supported);

        let info = orchestrator.language_info("tlh", LanguageKind::Spoken);
        assert_eq!(info.name, "Unknown Language");
        assert!(!info.supported);
    }
}
