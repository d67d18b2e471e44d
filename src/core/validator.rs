//! Request validation and text preprocessing
//!
//! Validation accumulates every violated rule instead of stopping at the
//! first one. Neither validation nor preprocessing performs any I/O.

use super::languages::{self, LanguageKind};
use super::types::{PreparedRequest, TranslationRequest};
use crate::config::ValidationSettings;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Default maximum text length, in characters
pub const MAX_TEXT_LENGTH: usize = 500;

static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.,!?-]").expect("valid character class"));
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// A single violated validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRule {
    TextRequired,
    TextTooLong { max: usize },
    UnsupportedSourceLanguage(String),
    UnsupportedTargetLanguage(String),
    InappropriateContent,
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextRequired => write!(f, "text required"),
            Self::TextTooLong { max } => {
                write!(f, "text is too long (maximum {} characters)", max)
            }
            Self::UnsupportedSourceLanguage(code) => {
                write!(f, "source language '{}' is not supported", code)
            }
            Self::UnsupportedTargetLanguage(code) => {
                write!(f, "target sign language '{}' is not supported", code)
            }
            Self::InappropriateContent => write!(f, "text contains inappropriate content"),
        }
    }
}

/// The full set of rules a request violated, in check order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationRule>);

impl ValidationErrors {
    pub fn rules(&self) -> &[ValidationRule] {
        &self.0
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn contains(&self, rule: &ValidationRule) -> bool {
        self.0.contains(rule)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

/// Checks requests against the language tables and content constraints
#[derive(Debug, Clone)]
pub struct Validator {
    max_text_length: usize,
    /// Lower-cased denylist entries
    denylist: Vec<String>,
}

impl Validator {
    pub fn new(settings: &ValidationSettings) -> Self {
        Self {
            max_text_length: settings.max_text_length,
            denylist: settings
                .denylist
                .iter()
                .map(|word| word.trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    /// Validate a request whose language codes were already normalized
    pub fn validate(&self, request: &TranslationRequest) -> Result<(), ValidationErrors> {
        let mut violations = Vec::new();
        let trimmed = request.text.trim();

        // Text made only of stripped characters has nothing left to translate
        if trimmed.is_empty() || DISALLOWED_CHARS.replace_all(trimmed, "").trim().is_empty() {
            violations.push(ValidationRule::TextRequired);
        }

        if trimmed.chars().count() > self.max_text_length {
            violations.push(ValidationRule::TextTooLong {
                max: self.max_text_length,
            });
        }

        if !languages::is_supported(&request.source_language, LanguageKind::Spoken) {
            violations.push(ValidationRule::UnsupportedSourceLanguage(
                request.source_language.clone(),
            ));
        }

        if !languages::is_supported(&request.target_language, LanguageKind::Sign) {
            violations.push(ValidationRule::UnsupportedTargetLanguage(
                request.target_language.clone(),
            ));
        }

        if self.contains_denied_content(&request.text) {
            violations.push(ValidationRule::InappropriateContent);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(violations))
        }
    }

    /// Preprocess the text of a normalized request for keying and dispatch
    pub fn prepare(&self, request: &TranslationRequest) -> PreparedRequest {
        PreparedRequest {
            text: preprocess_with_limit(&request.text, self.max_text_length),
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
        }
    }

    fn contains_denied_content(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.denylist.iter().any(|word| lower.contains(word.as_str()))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&ValidationSettings::default())
    }
}

/// Map language codes to their canonical form before validation
pub fn normalize_request(request: &TranslationRequest) -> TranslationRequest {
    TranslationRequest {
        text: request.text.clone(),
        source_language: languages::normalize_spoken_code(&request.source_language),
        target_language: languages::normalize_sign_code(&request.target_language),
    }
}

/// Clean up text before it is keyed and sent to a provider
pub fn preprocess(text: &str) -> String {
    preprocess_with_limit(text, MAX_TEXT_LENGTH)
}

/// Strip disallowed characters, collapse whitespace, trim and truncate.
///
/// Stripping runs first so that removed characters cannot leave behind
/// whitespace runs, which keeps the function idempotent.
pub fn preprocess_with_limit(text: &str, max_chars: usize) -> String {
    let stripped = DISALLOWED_CHARS.replace_all(text, "");
    let collapsed = WHITESPACE_RUNS.replace_all(&stripped, " ");
    let truncated: String = collapsed.trim().chars().take(max_chars).collect();
    truncated.trim_end().to_string()
}
