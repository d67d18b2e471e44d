//! JSON-over-HTTP remote translator

use super::{RemoteTranslation, RemoteTranslator};
use crate::core::providers::ProviderError;
use crate::core::types::PreparedRequest;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const PROVIDER_NAME: &str = "http-remote";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateBody<'a> {
    text: &'a str,
    source_language: &'a str,
    target_language: &'a str,
}

/// Calls a remote translation endpoint with a JSON POST
#[derive(Debug, Clone)]
pub struct HttpRemoteTranslator {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpRemoteTranslator {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sign-translate/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn map_send_error(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout {
                provider: PROVIDER_NAME,
                after_ms: self.timeout.as_millis() as u64,
            }
        } else {
            ProviderError::network(PROVIDER_NAME, err.to_string())
        }
    }

    fn map_status(status: StatusCode, retry_after: Option<u64>, body: &str) -> ProviderError {
        let message = format!("HTTP {}: {}", status.as_u16(), body.trim());
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            ProviderError::unavailable(PROVIDER_NAME, message, retry_after)
        } else {
            ProviderError::invalid_request(PROVIDER_NAME, message)
        }
    }
}

#[async_trait]
impl RemoteTranslator for HttpRemoteTranslator {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn translate(
        &self,
        request: &PreparedRequest,
    ) -> std::result::Result<RemoteTranslation, ProviderError> {
        let body = TranslateBody {
            text: &request.text,
            source_language: &request.source_language,
            target_language: &request.target_language,
        };

        debug!(endpoint = %self.endpoint, "Sending translation request");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Remote translator returned an error status");
            return Err(Self::map_status(status, retry_after, &text));
        }

        serde_json::from_str::<RemoteTranslation>(&text)
            .map_err(|e| ProviderError::malformed(PROVIDER_NAME, e.to_string()))
    }
}
