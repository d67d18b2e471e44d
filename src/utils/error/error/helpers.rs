//! Helper functions for creating and classifying errors

use super::types::TranslateError;
use crate::core::providers::ProviderError;

impl TranslateError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    /// Short machine-friendly name of the error kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Yaml(_) => "yaml",
            Self::Serialization(_) => "serialization",
            Self::HttpClient(_) => "http_client",
            Self::Validation(_) => "validation",
            Self::Provider(err) => err.kind(),
            Self::Superseded { .. } => "superseded",
            Self::NoPreviousRequest => "no_previous_request",
            Self::Timeout(_) => "timeout",
            Self::Internal(_) => "internal",
        }
    }

    /// Text shown to the end user while the session is in the `error` state
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => match errors.rules().len() {
                1 => format!("Please check your input: {}.", errors.messages()[0]),
                _ => "Please check your input and try again.".to_string(),
            },
            Self::Provider(ProviderError::Timeout { .. }) | Self::Timeout(_) => {
                "The translation service took too long to respond. Please try again.".to_string()
            }
            Self::Provider(err) if err.is_retryable() => {
                "The translation service is currently unreachable. Please try again.".to_string()
            }
            Self::Provider(_) => "Translation failed. Please try again.".to_string(),
            Self::NoPreviousRequest => "There is nothing to retry yet.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// Individual messages describing the failure, one per violated rule for
    /// validation errors.
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors.messages(),
            other => vec![other.to_string()],
        }
    }
}
