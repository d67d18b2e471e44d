//! History, statistics and language lookups

use super::Orchestrator;
use super::telemetry::ErrorRecord;
use crate::core::languages::{self, LanguageDetails, LanguageKind, SupportedLanguages};
use crate::core::types::TranslationResult;
use serde::Serialize;

/// Number of history entries returned when the caller has no preference
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Snapshot of translation activity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationStats {
    /// Translations currently held in the cache
    pub total_translations: usize,
    /// Fraction of lookups served from the cache since the last clear
    pub cache_hit_rate: f64,
    /// Mean confidence of cached translations, 0 when empty
    pub average_confidence: f64,
    pub supported_language_pairs: usize,
    pub is_online: bool,
}

impl Orchestrator {
    /// Cached translations, newest first
    pub fn history(&self, limit: usize) -> Vec<TranslationResult> {
        let mut results = self.cache.results();
        results.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        results.truncate(limit);
        results
    }

    pub fn stats(&self) -> TranslationStats {
        let results = self.cache.results();
        let average_confidence = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.confidence).sum::<f64>() / results.len() as f64
        };

        TranslationStats {
            total_translations: results.len(),
            cache_hit_rate: self.cache.stats().hit_rate(),
            average_confidence,
            supported_language_pairs: SupportedLanguages::new().pair_count(),
            is_online: self.is_online(),
        }
    }

    pub fn supported_languages(&self) -> SupportedLanguages {
        SupportedLanguages::new()
    }

    /// Display details for a language code; aliases resolve to their
    /// canonical code
    pub fn language_info(&self, code: &str, kind: LanguageKind) -> LanguageDetails {
        languages::language_info(code, kind)
    }

    /// Most recent failures, oldest first
    pub fn recent_errors(&self) -> Vec<ErrorRecord> {
        self.errors.records()
    }
}
