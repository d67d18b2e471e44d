//! Bounded result cache
//!
//! Holds completed translations keyed by the preprocessed request triple.
//! Eviction is strict FIFO by insertion order.

pub mod manager;
pub mod types;

pub use manager::ResultCache;
pub use types::{CacheEntry, CacheKey, CacheStats};
