//! Single-flight deduplication and supersession

#[cfg(test)]
mod tests {
    use crate::common::{
        DelayedProvider, GatedProvider, drain, fast_config, orchestrator_with, request, wait_until,
    };
    use sign_translate::{ManualConnectivity, OrchestratorState, TranslateError};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_identical_requests_share_one_invocation() {
        let provider = DelayedProvider::new(Duration::from_millis(50));
        let orchestrator = orchestrator_with(
            fast_config(),
            provider.clone(),
            Arc::new(ManualConnectivity::online()),
        );

        let (first, second) = tokio::join!(
            orchestrator.translate(request("Hello world", "ase")),
            orchestrator.translate(request("Hello world", "ase")),
        );

        // The second request superseded the first session
        assert!(matches!(first, Err(TranslateError::Superseded { session: 1 })));
        let second = second.unwrap();
        assert_eq!(second.original_text, "Hello world");
        assert_eq!(provider.calls(), 1);
        assert_eq!(orchestrator.stats().total_translations, 1);
    }

    #[tokio::test]
    async fn test_alias_joins_canonical_in_flight_request() {
        let provider = GatedProvider::new();
        let orchestrator = orchestrator_with(
            fast_config(),
            provider.clone(),
            Arc::new(ManualConnectivity::online()),
        );

        let first = tokio::spawn({
            let orchestrator = Arc::clone(&orchestrator);
            async move { orchestrator.translate(request("Thank you", "asl")).await }
        });
        wait_until(|| provider.calls() == 1).await;

        let second = tokio::spawn({
            let orchestrator = Arc::clone(&orchestrator);
            async move { orchestrator.translate(request("  Thank   you ", "ASE")).await }
        });
        wait_until(|| orchestrator.session_id() == 2).await;

        provider.release(1);
        let second = second.await.unwrap().unwrap();
        assert!(first.await.unwrap().is_err());

        assert_eq!(second.target_language, "ase");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_superseded_result_is_never_published() {
        let provider = GatedProvider::new();
        let orchestrator = orchestrator_with(
            fast_config(),
            provider.clone(),
            Arc::new(ManualConnectivity::online()),
        );
        let mut updates = orchestrator.subscribe();

        let a = tokio::spawn({
            let orchestrator = Arc::clone(&orchestrator);
            async move { orchestrator.translate(request("Good morning", "ase")).await }
        });
        wait_until(|| provider.calls() == 1).await;

        let b = tokio::spawn({
            let orchestrator = Arc::clone(&orchestrator);
            async move { orchestrator.translate(request("Good night", "ase")).await }
        });
        wait_until(|| provider.calls() == 2).await;

        // A finishes first, after B already took over
        provider.release(1);
        let a = a.await.unwrap();
        assert!(matches!(a, Err(TranslateError::Superseded { session: 1 })));
        assert_eq!(orchestrator.state(), OrchestratorState::Loading);

        provider.release(1);
        let b = b.await.unwrap().unwrap();
        assert_eq!(b.original_text, "Good night");

        let updates = drain(&mut updates);
        assert!(
            updates
                .iter()
                .filter(|update| update.session == 1)
                .all(|update| update.result.is_none()),
            "superseded session published a result: {:?}",
            updates
        );

        let loading_b = updates
            .iter()
            .position(|u| u.session == 2 && u.state == OrchestratorState::Loading)
            .unwrap();
        assert!(updates[..loading_b].iter().all(|u| u.session == 1));
        assert!(updates[loading_b..].iter().all(|u| u.session == 2));

        // The superseded invocation still filled the cache
        assert_eq!(orchestrator.stats().total_translations, 2);
    }

    #[tokio::test]
    async fn test_superseded_invocation_serves_later_request_from_cache() {
        let provider = GatedProvider::new();
        let orchestrator = orchestrator_with(
            fast_config(),
            provider.clone(),
            Arc::new(ManualConnectivity::online()),
        );

        let a = tokio::spawn({
            let orchestrator = Arc::clone(&orchestrator);
            async move { orchestrator.translate(request("See you", "ase")).await }
        });
        wait_until(|| provider.calls() == 1).await;

        // Supersede with an invalid request, then let A's call finish
        assert!(orchestrator.translate(request("", "ase")).await.is_err());
        provider.release(1);
        assert!(a.await.unwrap().is_err());

        let result = orchestrator.translate(request("See you", "ase")).await.unwrap();
        assert_eq!(result.original_text, "See you");
        assert_eq!(provider.calls(), 1);
        assert_eq!(orchestrator.state(), OrchestratorState::Translating);
    }
}
