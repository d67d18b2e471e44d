//! Cache manager implementation
//!
//! `ResultCache` wraps an [`LruCache`] but never promotes entries: lookups use
//! `peek`, updates use `peek_mut`, and only `push` of a new key touches the
//! order. The least-recently-used slot is therefore always the oldest
//! insertion, which gives strict FIFO eviction with O(1) operations.

use super::types::{AtomicCacheStats, CacheEntry, CacheKey, CacheStats};
use crate::config::CacheSettings;
use crate::core::types::TranslationResult;
use crate::utils::error::{Result, TranslateError};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::atomic::Ordering;
use tracing::{debug, info, warn};

/// Default number of cached translations
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Bounded FIFO cache of translation results
pub struct ResultCache {
    entries: Mutex<LruCache<CacheKey, CacheEntry>>,
    capacity: NonZeroUsize,
    stats: AtomicCacheStats,
}

impl ResultCache {
    /// Create a cache holding at most `capacity` results
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            TranslateError::Config(
                "Invalid cache configuration: max_entries must be greater than 0".to_string(),
            )
        })?;

        Ok(Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity,
            stats: AtomicCacheStats::default(),
        })
    }

    pub fn from_settings(settings: &CacheSettings) -> Result<Self> {
        Self::new(settings.max_entries)
    }

    /// Look up a result without changing its eviction position.
    ///
    /// An entry that fails the consistency check is dropped and reported as a
    /// miss.
    pub fn get(&self, key: &CacheKey) -> Option<TranslationResult> {
        let mut entries = self.entries.lock();

        let consistent = match entries.peek(key) {
            Some(entry) => entry.is_consistent_with(key),
            None => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                debug!("Cache miss for key: {:?}", key);
                return None;
            }
        };

        if !consistent {
            entries.pop(key);
            self.stats.corrupted.fetch_add(1, Ordering::Relaxed);
            self.stats.misses.fetch_add(1, Ordering::Relaxed);
            warn!("Dropped inconsistent cache entry for key: {:?}", key);
            return None;
        }

        self.stats.hits.fetch_add(1, Ordering::Relaxed);
        debug!("Cache hit for key: {:?}", key);
        entries.peek(key).map(|entry| entry.value.clone())
    }

    /// Look up a result without recording a hit or a miss
    pub fn peek(&self, key: &CacheKey) -> Option<TranslationResult> {
        self.entries
            .lock()
            .peek(key)
            .filter(|entry| entry.is_consistent_with(key))
            .map(|entry| entry.value.clone())
    }

    /// Insert or update a result.
    ///
    /// Updating an existing key keeps its original insertion position.
    pub fn put(&self, key: CacheKey, result: TranslationResult) {
        let mut entries = self.entries.lock();

        if let Some(entry) = entries.peek_mut(&key) {
            entry.replace(result);
            debug!("Updated cached result for key: {:?}", key);
            return;
        }

        self.stats.insertions.fetch_add(1, Ordering::Relaxed);
        if let Some((evicted, _)) = entries.push(key.clone(), CacheEntry::new(result)) {
            self.stats.evictions.fetch_add(1, Ordering::Relaxed);
            debug!("Evicted oldest cache entry: {:?}", evicted);
        }
        debug!("Cached result for key: {:?}", key);
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.lock().contains(key)
    }

    pub fn size(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Cached results, newest insertion first
    pub fn results(&self) -> Vec<TranslationResult> {
        self.entries
            .lock()
            .iter()
            .map(|(_, entry)| entry.value.clone())
            .collect()
    }

    /// Get cache statistics (snapshot)
    pub fn stats(&self) -> CacheStats {
        let size = self.size();
        self.stats.snapshot(size, self.capacity())
    }

    /// Remove every entry and reset statistics
    pub fn clear(&self) {
        self.entries.lock().clear();
        self.stats.reset();
        info!("Translation cache cleared");
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self {
            entries: Mutex::new(LruCache::new(
                NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            )),
            capacity: NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            stats: AtomicCacheStats::default(),
        }
    }
}
