//! Input validation configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Limits applied to incoming requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Maximum text length, in characters, after trimming
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
    /// Case-insensitive substrings that reject a request
    #[serde(default = "default_denylist")]
    pub denylist: Vec<String>,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            max_text_length: default_max_text_length(),
            denylist: default_denylist(),
        }
    }
}
