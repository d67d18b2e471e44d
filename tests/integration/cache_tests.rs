//! Result caching through the orchestrator

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::common::{DelayedProvider, drain, fast_config, orchestrator_with, request};
    use sign_translate::core::validator::ValidationRule;
    use sign_translate::{ManualConnectivity, OrchestratorState, TranslateError};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_alias_and_canonical_code_share_a_cache_entry() {
        let provider = DelayedProvider::new(Duration::ZERO);
        let orchestrator = orchestrator_with(
            fast_config(),
            provider.clone(),
            Arc::new(ManualConnectivity::online()),
        );

        let first = assert_ok!(orchestrator.translate(request("Hello", "asl")).await);
        let mut updates = orchestrator.subscribe();
        let second = assert_ok!(orchestrator.translate(request("Hello", "ase")).await);

        assert_eq!(provider.calls(), 1);
        assert_eq!(first, second);
        assert_eq!(second.target_language, "ase");

        // A cache hit goes straight to translating
        let states: Vec<_> = drain(&mut updates).iter().map(|u| u.state).collect();
        assert_eq!(
            states,
            vec![OrchestratorState::Loading, OrchestratorState::Translating]
        );
    }

    #[tokio::test]
    async fn test_whitespace_text_never_reaches_the_cache() {
        let provider = DelayedProvider::new(Duration::ZERO);
        let orchestrator = orchestrator_with(
            fast_config(),
            provider.clone(),
            Arc::new(ManualConnectivity::online()),
        );

        let err = assert_err!(orchestrator.translate(request("   ", "ase")).await);
        match err {
            TranslateError::Validation(errors) => {
                assert_eq!(errors.rules(), &[ValidationRule::TextRequired]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        // Nothing survives preprocessing, so there is no key to look up
        assert_err!(orchestrator.translate(request("@@@", "ase")).await);

        assert_eq!(provider.calls(), 0);
        assert_eq!(orchestrator.stats().total_translations, 0);
        assert_eq!(orchestrator.state(), OrchestratorState::Error);
    }

    #[tokio::test]
    async fn test_oldest_entry_is_evicted_first() {
        let mut config = fast_config();
        config.translator.cache.max_entries = 2;
        let provider = DelayedProvider::new(Duration::ZERO);
        let orchestrator = orchestrator_with(
            config,
            provider.clone(),
            Arc::new(ManualConnectivity::online()),
        );

        for text in ["one", "two", "three"] {
            assert_ok!(orchestrator.translate(request(text, "ase")).await);
        }
        assert_eq!(provider.calls(), 3);
        assert_eq!(orchestrator.stats().total_translations, 2);

        // "two" is still cached, "one" was evicted
        assert_ok!(orchestrator.translate(request("two", "ase")).await);
        assert_eq!(provider.calls(), 3);
        assert_ok!(orchestrator.translate(request("one", "ase")).await);
        assert_eq!(provider.calls(), 4);
    }

    #[tokio::test]
    async fn test_history_and_stats() {
        let provider = DelayedProvider::with_confidence(Duration::ZERO, 0.8);
        let orchestrator = orchestrator_with(
            fast_config(),
            provider.clone(),
            Arc::new(ManualConnectivity::online()),
        );

        assert_ok!(orchestrator.translate(request("first", "ase")).await);
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_ok!(orchestrator.translate(request("second", "bfi")).await);
        assert_ok!(orchestrator.translate(request("second", "bsl")).await);

        let history = orchestrator.history(10);
        let texts: Vec<_> = history.iter().map(|r| r.original_text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
        assert_eq!(orchestrator.history(1).len(), 1);

        let stats = orchestrator.stats();
        assert_eq!(stats.total_translations, 2);
        assert_eq!(stats.supported_language_pairs, 50);
        assert!(stats.is_online);
        assert_approx_eq!(stats.average_confidence, 0.8);
        // Three lookups, one of them a hit
        assert_approx_eq!(stats.cache_hit_rate, 1.0 / 3.0);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_a_new_invocation() {
        let provider = DelayedProvider::new(Duration::ZERO);
        let orchestrator = orchestrator_with(
            fast_config(),
            provider.clone(),
            Arc::new(ManualConnectivity::online()),
        );

        assert_ok!(orchestrator.translate(request("Hello", "ase")).await);
        orchestrator.clear_cache();
        assert!(orchestrator.history(10).is_empty());

        assert_ok!(orchestrator.translate(request("Hello", "ase")).await);
        assert_eq!(provider.calls(), 2);
    }
}
