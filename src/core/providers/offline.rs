//! Offline provider: a local, degraded translation path

use super::{ProviderError, ProviderKind, TranslationProvider};
use crate::core::types::{PreparedRequest, TranslationResult};
use async_trait::async_trait;
use chrono::Utc;

/// Confidence reported by the local path before the configured ceiling
const OFFLINE_BASE_CONFIDENCE: f64 = 0.6;
const OFFLINE_PREFIX: &str = "[Offline]";
const BASIC_SIGN_WRITING: &str = "𝕊𝕚𝕘𝕟 𝕎𝕣𝕚𝕥𝕚𝕟𝕘";
const PREVIEW_CHARS: usize = 50;

/// Produces basic sign renderings without the remote service
#[derive(Debug, Clone)]
pub struct OfflineProvider {
    confidence_ceiling: f64,
}

impl OfflineProvider {
    pub fn new(confidence_ceiling: f64) -> Self {
        Self {
            confidence_ceiling: confidence_ceiling.clamp(0.0, 1.0),
        }
    }

    fn basic_translation(text: &str, target_language: &str) -> String {
        let preview: String = text.chars().take(PREVIEW_CHARS).collect();
        let ellipsis = if text.chars().count() > PREVIEW_CHARS {
            "..."
        } else {
            ""
        };
        format!(
            "{} Basic {} signs for: \"{}{}\"",
            OFFLINE_PREFIX,
            target_language.to_uppercase(),
            preview,
            ellipsis
        )
    }
}

impl Default for OfflineProvider {
    fn default() -> Self {
        Self::new(OFFLINE_BASE_CONFIDENCE)
    }
}

#[async_trait]
impl TranslationProvider for OfflineProvider {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Offline
    }

    async fn invoke(&self, request: &PreparedRequest) -> Result<TranslationResult, ProviderError> {
        if request.text.is_empty() {
            return Err(ProviderError::invalid_request(
                self.name(),
                "nothing to translate",
            ));
        }

        Ok(TranslationResult {
            original_text: request.text.clone(),
            translated_text: Self::basic_translation(&request.text, &request.target_language),
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
            confidence: OFFLINE_BASE_CONFIDENCE.min(self.confidence_ceiling),
            sign_writing: BASIC_SIGN_WRITING.to_string(),
            video_url: None,
            timestamp: Utc::now(),
            offline: true,
            warning: None,
        })
    }
}
