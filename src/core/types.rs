//! Request and result types shared by every component

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Warning attached to results below this confidence
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.5;

pub const LOW_CONFIDENCE_WARNING: &str =
    "Low confidence translation. Results may not be accurate.";
pub const OFFLINE_WARNING: &str = "Offline translation. Limited functionality available.";

/// A user-issued translation request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Spoken-language text to translate
    pub text: String,
    /// Spoken language code, e.g. `en`
    pub source_language: String,
    /// Sign language code, e.g. `ase`
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// A request that passed validation and preprocessing, ready for a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// Preprocessed text
    pub text: String,
    /// Canonical spoken language code
    pub source_language: String,
    /// Canonical sign language code
    pub target_language: String,
}

/// Outcome of one successful provider invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    /// Pose payload in SignWriting notation
    pub sign_writing: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub offline: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl TranslationResult {
    /// Attach the quality warning required before a result may be published.
    ///
    /// The offline warning wins over the low-confidence one.
    pub fn with_quality_warning(mut self) -> Self {
        if self.confidence < LOW_CONFIDENCE_THRESHOLD {
            self.warning = Some(LOW_CONFIDENCE_WARNING.to_string());
        }
        if self.offline {
            self.warning = Some(OFFLINE_WARNING.to_string());
        }
        self
    }

    /// Whether the result carries a pose payload
    pub fn has_pose(&self) -> bool {
        !self.sign_writing.is_empty()
    }

    /// Whether the result carries a video payload
    pub fn has_video(&self) -> bool {
        self.video_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}
