//! Error types for the translator

use crate::core::providers::ProviderError;
use crate::core::validator::ValidationErrors;
use thiserror::Error;

/// Result type alias for the translator
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Main error type for the translator
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Request failed one or more validation rules
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// Provider failed after the retry policy gave up, or with a terminal error
    #[error("Provider error: {0}")]
    Provider(ProviderError),

    /// A newer request replaced this session before it finished
    #[error("Session {session} was superseded by a newer request")]
    Superseded { session: u64 },

    /// `retry()` was called before any request was submitted
    #[error("No previous request to retry")]
    NoPreviousRequest,

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
