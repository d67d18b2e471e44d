//! Cache manager type definitions
//!
//! Cache keys, entries and statistics.

use crate::core::types::{PreparedRequest, TranslationResult};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const KEY_SEPARATOR: char = '\u{0000}';

/// Cache key: `text \0 source \0 target`.
///
/// The separator cannot appear in any component, so distinct triples never
/// produce the same key.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(text: &str, source_language: &str, target_language: &str) -> Self {
        let mut key =
            String::with_capacity(text.len() + source_language.len() + target_language.len() + 2);
        key.push_str(text);
        key.push(KEY_SEPARATOR);
        key.push_str(source_language);
        key.push(KEY_SEPARATOR);
        key.push_str(target_language);
        Self(key)
    }

    /// Create a key from a validated, preprocessed request
    pub fn from_request(request: &PreparedRequest) -> Self {
        Self::new(
            &request.text,
            &request.source_language,
            &request.target_language,
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the key back into `(text, source, target)`
    pub fn parts(&self) -> Option<(&str, &str, &str)> {
        let mut parts = self.0.rsplitn(3, KEY_SEPARATOR);
        let target = parts.next()?;
        let source = parts.next()?;
        let text = parts.next()?;
        Some((text, source, target))
    }
}

impl fmt::Debug for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parts() {
            Some((text, source, target)) => write!(f, "{}:{}->{}", text, source, target),
            None => write!(f, "{:?}", self.0),
        }
    }
}

/// Cache entry with metadata
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached result
    pub value: TranslationResult,
    /// When the entry was first inserted
    pub inserted_at: Instant,
    /// When the value was last replaced
    pub updated_at: Instant,
}

impl CacheEntry {
    pub fn new(value: TranslationResult) -> Self {
        let now = Instant::now();
        Self {
            value,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace the value, keeping the original insertion time
    pub fn replace(&mut self, value: TranslationResult) {
        self.value = value;
        self.updated_at = Instant::now();
    }

    /// Get the age of the entry
    pub fn age(&self) -> Duration {
        Instant::now().duration_since(self.inserted_at)
    }

    /// Whether the stored value still describes the request it is keyed by
    pub fn is_consistent_with(&self, key: &CacheKey) -> bool {
        let Some((_, source, target)) = key.parts() else {
            return false;
        };
        self.value.source_language == source
            && self.value.target_language == target
            && self.value.confidence.is_finite()
            && (0.0..=1.0).contains(&self.value.confidence)
    }
}

/// Atomic cache statistics for lock-free updates
#[derive(Debug, Default)]
pub struct AtomicCacheStats {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub insertions: AtomicU64,
    pub evictions: AtomicU64,
    /// Entries dropped because they failed the consistency check
    pub corrupted: AtomicU64,
}

/// Cache statistics snapshot (returned to callers)
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
    pub corrupted: u64,
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        let total_requests = self.hits + self.misses;
        if total_requests == 0 {
            0.0
        } else {
            self.hits as f64 / total_requests as f64
        }
    }
}

impl AtomicCacheStats {
    /// Create a snapshot of current stats
    pub fn snapshot(&self, size: usize, capacity: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            insertions: self.insertions.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            corrupted: self.corrupted.load(Ordering::Relaxed),
            size,
            capacity,
        }
    }

    /// Reset all stats to zero
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.insertions.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        self.corrupted.store(0, Ordering::Relaxed);
    }
}
