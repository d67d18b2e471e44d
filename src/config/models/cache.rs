//! Cache configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Result cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Maximum number of cached results before FIFO eviction
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}
