//! Simulated remote translator
//!
//! Stands in for the remote service when no endpoint is configured: waits a
//! random latency and produces plausible-looking output.

use super::{RemoteTranslation, RemoteTranslator};
use crate::core::providers::ProviderError;
use crate::core::types::PreparedRequest;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::time::Duration;

const SIGN_SYMBOLS: &[&str] = &["𝕊", "𝕚", "𝕘", "𝕟", "𝕎", "𝕣", "𝕚", "𝕥", "𝕚", "𝕟", "𝕘"];
const MAX_SIGNS: usize = 20;
const DEFAULT_VIDEO_BASE: &str = "https://cdn.example.com/sign-videos";

/// Mock remote with configurable latency
#[derive(Debug, Clone)]
pub struct SimulatedRemote {
    min_latency: Duration,
    max_latency: Duration,
    video_base_url: String,
}

impl SimulatedRemote {
    pub fn new(min_latency: Duration, max_latency: Duration) -> Self {
        Self {
            min_latency,
            max_latency: max_latency.max(min_latency),
            video_base_url: DEFAULT_VIDEO_BASE.to_string(),
        }
    }

    /// Remote that answers immediately
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn with_video_base_url(mut self, base: impl Into<String>) -> Self {
        self.video_base_url = base.into().trim_end_matches('/').to_string();
        self
    }

    fn latency(&self) -> Duration {
        let spread = self.max_latency.saturating_sub(self.min_latency);
        self.min_latency + spread.mul_f64(rand::random::<f64>())
    }

    fn translated_text(text: &str, target_language: &str) -> String {
        let label = match target_language {
            "ase" => "ASL",
            "bfi" => "BSL",
            "fsl" => "FSL",
            "gsg" => "GSL",
            "jsl" => "JSL",
            _ => return format!("Sign language translation for: \"{}\"", text),
        };
        format!("{} translation for: \"{}\"", label, text)
    }

    fn sign_writing(text: &str) -> String {
        let word_count = text.split(' ').count();
        let sign_count = (word_count * 2).min(MAX_SIGNS);
        (0..sign_count)
            .map(|_| SIGN_SYMBOLS[rand::random::<usize>() % SIGN_SYMBOLS.len()])
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn video_url(&self, text: &str, target_language: &str) -> String {
        let encoded = STANDARD.encode(format!("{}{}", text, target_language));
        let video_id: String = encoded
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .take(12)
            .collect();
        format!("{}/{}/{}.mp4", self.video_base_url, target_language, video_id)
    }
}

impl Default for SimulatedRemote {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), Duration::from_millis(3000))
    }
}

#[async_trait]
impl RemoteTranslator for SimulatedRemote {
    fn name(&self) -> &'static str {
        "simulated-remote"
    }

    async fn translate(
        &self,
        request: &PreparedRequest,
    ) -> Result<RemoteTranslation, ProviderError> {
        let latency = self.latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        Ok(RemoteTranslation {
            translated_text: Self::translated_text(&request.text, &request.target_language),
            confidence: 0.85 + rand::random::<f64>() * 0.15,
            sign_writing: Self::sign_writing(&request.text),
            video_url: Some(self.video_url(&request.text, &request.target_language)),
        })
    }
}
