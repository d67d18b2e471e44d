//! Type conversions for TranslateError

use super::types::TranslateError;
use crate::core::providers::ProviderError;
use crate::core::validator::ValidationErrors;

impl From<ProviderError> for TranslateError {
    fn from(err: ProviderError) -> Self {
        TranslateError::Provider(err)
    }
}

impl From<ValidationErrors> for TranslateError {
    fn from(errors: ValidationErrors) -> Self {
        TranslateError::Validation(errors)
    }
}

impl From<url::ParseError> for TranslateError {
    fn from(err: url::ParseError) -> Self {
        TranslateError::Config(format!("Invalid URL: {}", err))
    }
}

impl From<tokio::task::JoinError> for TranslateError {
    fn from(err: tokio::task::JoinError) -> Self {
        TranslateError::Internal(format!("Background task failed: {}", err))
    }
}
