//! Retry mechanism with exponential backoff

use super::types::RetryConfig;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Retry mechanism with exponential backoff
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Execute a function, retrying every failure until attempts run out
    pub async fn call<F, Fut, R, E>(&self, f: F) -> std::result::Result<R, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = std::result::Result<R, E>>,
        E: std::fmt::Display + std::fmt::Debug,
    {
        self.call_when(f, |_| true).await
    }

    /// Execute a function, retrying only failures accepted by `should_retry`.
    ///
    /// Rejected failures are returned immediately.
    pub async fn call_when<F, Fut, R, E, P>(&self, f: F, should_retry: P) -> std::result::Result<R, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = std::result::Result<R, E>>,
        E: std::fmt::Display + std::fmt::Debug,
        P: Fn(&E) -> bool,
    {
        self.call_with_hint(f, should_retry, |_| None).await
    }

    /// Like [`RetryPolicy::call_when`], but waits at least the delay that
    /// `delay_hint` reads from the failure (e.g. a `Retry-After` header).
    ///
    /// Hinted delays are capped at `max_delay`.
    pub async fn call_with_hint<F, Fut, R, E, P, H>(
        &self,
        mut f: F,
        should_retry: P,
        delay_hint: H,
    ) -> std::result::Result<R, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = std::result::Result<R, E>>,
        E: std::fmt::Display + std::fmt::Debug,
        P: Fn(&E) -> bool,
        H: Fn(&E) -> Option<Duration>,
    {
        let mut attempt = 0;

        loop {
            attempt += 1;

            match f().await {
                Ok(result) => {
                    if attempt > 1 {
                        debug!("Retry succeeded on attempt {}", attempt);
                    }
                    return Ok(result);
                }
                Err(err) if !should_retry(&err) => {
                    debug!("Attempt {} failed with non-retryable error: {}", attempt, err);
                    return Err(err);
                }
                Err(err) => {
                    if attempt >= self.config.max_attempts {
                        error!("Retry failed after {} attempts: {}", attempt, err);
                        return Err(err);
                    }

                    let backoff = self.jittered(self.config.delay_for_attempt(attempt));
                    let delay = match delay_hint(&err) {
                        Some(hint) => hint.min(self.config.max_delay).max(backoff),
                        None => backoff,
                    };
                    warn!(
                        "Attempt {} failed: {}, retrying in {:?}",
                        attempt, err, delay
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    fn jittered(&self, delay: Duration) -> Duration {
        if !self.config.jitter {
            return delay;
        }
        let jitter_factor = 0.1;
        let jitter = delay.as_millis() as f64 * jitter_factor * (rand::random::<f64>() - 0.5);
        Duration::from_millis((delay.as_millis() as f64 + jitter).max(0.0) as u64)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}
