//! Translation providers driven by the test

use async_trait::async_trait;
use chrono::Utc;
use sign_translate::core::providers::{ProviderError, ProviderKind, TranslationProvider};
use sign_translate::core::types::PreparedRequest;
use sign_translate::TranslationResult;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Semaphore;

/// Online-looking result for `request`
pub fn online_result(request: &PreparedRequest, confidence: f64) -> TranslationResult {
    TranslationResult {
        original_text: request.text.clone(),
        translated_text: format!("ASL translation for: \"{}\"", request.text),
        source_language: request.source_language.clone(),
        target_language: request.target_language.clone(),
        confidence,
        sign_writing: "𝕊𝕚𝕘𝕟𝕎".to_string(),
        video_url: Some(format!(
            "https://cdn.example.com/sign-videos/{}/{}.mp4",
            request.target_language,
            request.text.len()
        )),
        timestamp: Utc::now(),
        offline: false,
        warning: None,
    }
}

/// Provider whose invocations wait for [`GatedProvider::release`]
pub struct GatedProvider {
    gate: Semaphore,
    calls: AtomicUsize,
}

impl GatedProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            gate: Semaphore::new(0),
            calls: AtomicUsize::new(0),
        })
    }

    /// Let `n` waiting (or future) invocations complete, oldest first
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationProvider for GatedProvider {
    fn name(&self) -> &'static str {
        "gated"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Online
    }

    async fn invoke(&self, request: &PreparedRequest) -> Result<TranslationResult, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| ProviderError::internal("gated", e.to_string()))?;
        permit.forget();
        Ok(online_result(request, 0.9))
    }
}

/// Provider that answers after a fixed delay
pub struct DelayedProvider {
    delay: Duration,
    confidence: f64,
    calls: AtomicUsize,
}

impl DelayedProvider {
    pub fn new(delay: Duration) -> Arc<Self> {
        Self::with_confidence(delay, 0.9)
    }

    pub fn with_confidence(delay: Duration, confidence: f64) -> Arc<Self> {
        Arc::new(Self {
            delay,
            confidence,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationProvider for DelayedProvider {
    fn name(&self) -> &'static str {
        "delayed"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Online
    }

    async fn invoke(&self, request: &PreparedRequest) -> Result<TranslationResult, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(online_result(request, self.confidence))
    }
}

/// Provider that fails its first `failures` invocations with `error`
pub struct FlakyProvider {
    failures: usize,
    error: ProviderError,
    calls: AtomicUsize,
}

impl FlakyProvider {
    pub fn new(failures: usize, error: ProviderError) -> Arc<Self> {
        Arc::new(Self {
            failures,
            error,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationProvider for FlakyProvider {
    fn name(&self) -> &'static str {
        "flaky"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Online
    }

    async fn invoke(&self, request: &PreparedRequest) -> Result<TranslationResult, ProviderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err(self.error.clone())
        } else {
            Ok(online_result(request, 0.9))
        }
    }
}
