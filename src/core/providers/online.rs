//! Online provider backed by a remote translation capability

use super::remote::RemoteTranslator;
use super::{ProviderError, ProviderKind, TranslationProvider};
use crate::core::types::{PreparedRequest, TranslationResult};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// Translates through the remote service
pub struct OnlineProvider {
    remote: Arc<dyn RemoteTranslator>,
}

impl OnlineProvider {
    pub fn new(remote: Arc<dyn RemoteTranslator>) -> Self {
        Self { remote }
    }
}

#[async_trait]
impl TranslationProvider for OnlineProvider {
    fn name(&self) -> &'static str {
        self.remote.name()
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Online
    }

    async fn invoke(&self, request: &PreparedRequest) -> Result<TranslationResult, ProviderError> {
        debug!(
            remote = self.remote.name(),
            source = %request.source_language,
            target = %request.target_language,
            "Invoking remote translator"
        );

        let translation = self.remote.translate(request).await?;

        if !translation.confidence.is_finite() || !(0.0..=1.0).contains(&translation.confidence) {
            return Err(ProviderError::malformed(
                self.remote.name(),
                format!("confidence {} outside [0, 1]", translation.confidence),
            ));
        }
        if translation.sign_writing.trim().is_empty() {
            return Err(ProviderError::malformed(
                self.remote.name(),
                "response carries no SignWriting payload",
            ));
        }

        Ok(TranslationResult {
            original_text: request.text.clone(),
            translated_text: translation.translated_text,
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
            confidence: translation.confidence,
            sign_writing: translation.sign_writing,
            video_url: translation.video_url.filter(|url| !url.is_empty()),
            timestamp: Utc::now(),
            offline: false,
            warning: None,
        })
    }
}
