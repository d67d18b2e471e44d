//! HTTP remote translator against a mock server

#[cfg(test)]
mod tests {
    use crate::common::{fast_config, request};
    use serde_json::json;
    use sign_translate::config::RemoteMode;
    use sign_translate::core::providers::ProviderError;
    use sign_translate::{Config, Orchestrator, OrchestratorState, TranslateError};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn http_config(server: &MockServer) -> Config {
        let mut config = fast_config();
        config.translator.provider.mode = RemoteMode::Http;
        config.translator.provider.endpoint = Some(format!("{}/translate", server.uri()));
        config
    }

    fn translation_body() -> serde_json::Value {
        json!({
            "translatedText": "ASL translation for: \"Hello world\"",
            "confidence": 0.92,
            "signWriting": "𝕊𝕚𝕘𝕟",
            "videoUrl": "https://cdn.example.com/sign-videos/ase/abc.mp4"
        })
    }

    #[tokio::test]
    async fn test_successful_remote_translation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_json(json!({
                "text": "Hello world!",
                "sourceLanguage": "en",
                "targetLanguage": "ase"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(translation_body()))
            .expect(1)
            .mount(&server)
            .await;

        let orchestrator = Orchestrator::builder(http_config(&server)).build().unwrap();
        let result = orchestrator
            .translate(request("Hello   world!", "asl"))
            .await
            .unwrap();

        assert_eq!(result.original_text, "Hello world!");
        assert_eq!(result.confidence, 0.92);
        assert!(!result.offline);
        assert_eq!(orchestrator.state(), OrchestratorState::Translating);
    }

    #[tokio::test]
    async fn test_server_errors_are_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(translation_body()))
            .mount(&server)
            .await;

        let orchestrator = Orchestrator::builder(http_config(&server)).build().unwrap();
        let result = orchestrator.translate(request("Hello world", "ase")).await;

        assert!(result.is_ok());
        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 3);
    }

    #[tokio::test]
    async fn test_client_errors_are_terminal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(400).set_body_string("unsupported pair"))
            .expect(1)
            .mount(&server)
            .await;

        let orchestrator = Orchestrator::builder(http_config(&server)).build().unwrap();
        let err = orchestrator
            .translate(request("Hello world", "ase"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TranslateError::Provider(ProviderError::InvalidRequest { .. })
        ));
        assert_eq!(orchestrator.state(), OrchestratorState::Error);
    }

    #[tokio::test]
    async fn test_undecodable_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let orchestrator = Orchestrator::builder(http_config(&server)).build().unwrap();
        let err = orchestrator
            .translate(request("Hello world", "ase"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TranslateError::Provider(ProviderError::MalformedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_out_of_range_confidence_is_rejected() {
        let server = MockServer::start().await;
        let mut body = translation_body();
        body["confidence"] = json!(1.7);
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let orchestrator = Orchestrator::builder(http_config(&server)).build().unwrap();
        let err = orchestrator
            .translate(request("Hello world", "ase"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "malformed_response");
        assert_eq!(orchestrator.stats().total_translations, 0);
    }
}
