//! Deadline protection for async operations

use crate::core::providers::ProviderError;
use crate::utils::error::{Result, TranslateError};
use std::time::Duration;

/// Timeout wrapper for async operations
#[derive(Debug, Clone, Copy)]
pub struct TimeoutWrapper {
    timeout: Duration,
}

impl TimeoutWrapper {
    /// Create a new timeout wrapper
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute a future with timeout protection
    pub async fn call<F, R>(&self, f: F) -> Result<R>
    where
        F: std::future::Future<Output = R>,
    {
        match tokio::time::timeout(self.timeout, f).await {
            Ok(result) => Ok(result),
            Err(_) => Err(TranslateError::Timeout(format!(
                "Operation timed out after {:?}",
                self.timeout
            ))),
        }
    }

    /// Execute a provider call, mapping an elapsed deadline to a recoverable
    /// [`ProviderError::Timeout`]
    pub async fn call_provider<F, T>(
        &self,
        provider: &'static str,
        f: F,
    ) -> std::result::Result<T, ProviderError>
    where
        F: std::future::Future<Output = std::result::Result<T, ProviderError>>,
    {
        match self.call(f).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout {
                provider,
                after_ms: self.timeout.as_millis() as u64,
            }),
        }
    }
}
