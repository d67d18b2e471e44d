//! Single-flight deduplication of provider invocations
//!
//! Concurrent requests for the same cache key share one invocation. The
//! invocation runs on its own task, so it keeps going (and fills the cache)
//! even when every session waiting on it has been superseded.

use crate::core::cache_manager::{CacheKey, ResultCache};
use crate::core::providers::ProviderError;
use crate::core::types::TranslationResult;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

pub type FlightOutcome = Result<TranslationResult, ProviderError>;
pub type Flight = Shared<BoxFuture<'static, FlightOutcome>>;

/// What a caller got when asking for a result
pub enum Joined {
    /// Another invocation populated the cache in the meantime
    Cached(TranslationResult),
    /// A pending invocation; `leader` is true for the caller that started it
    Pending { flight: Flight, leader: bool },
}

/// Registry of in-flight invocations keyed by cache key
#[derive(Default)]
pub struct SingleFlight {
    flights: Mutex<HashMap<CacheKey, Flight>>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the pending invocation for `key`, or start one with `invoke`.
    ///
    /// The cache is checked again under the registry lock so that a caller
    /// arriving right after an invocation finished reads its result instead
    /// of starting a second one. A successful outcome is written to the cache
    /// before the registry entry is removed.
    pub fn join_or_start<F>(
        self: &Arc<Self>,
        key: CacheKey,
        cache: &Arc<ResultCache>,
        invoke: F,
    ) -> Joined
    where
        F: FnOnce() -> BoxFuture<'static, FlightOutcome>,
    {
        let mut flights = self.flights.lock();

        if let Some(flight) = flights.get(&key) {
            debug!("Joining in-flight invocation for key: {:?}", key);
            return Joined::Pending {
                flight: flight.clone(),
                leader: false,
            };
        }

        if let Some(result) = cache.peek(&key) {
            return Joined::Cached(result);
        }

        let registry = Arc::clone(self);
        let cache = Arc::clone(cache);
        let task_key = key.clone();
        let invocation = invoke();

        let handle = tokio::spawn(async move {
            let outcome = invocation.await;
            let mut flights = registry.flights.lock();
            if let Ok(result) = &outcome {
                cache.put(task_key.clone(), result.clone());
            }
            flights.remove(&task_key);
            outcome
        });

        let flight = async move {
            handle.await.unwrap_or_else(|err| {
                Err(ProviderError::internal(
                    "single-flight",
                    format!("invocation task failed: {}", err),
                ))
            })
        }
        .boxed()
        .shared();

        flights.insert(key, flight.clone());
        Joined::Pending {
            flight,
            leader: true,
        }
    }

    /// Number of invocations currently pending
    pub fn len(&self) -> usize {
        self.flights.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
