//! Provider error type
//!
//! | Variant | Retryable |
//! |------|--------|
//! | Network | Yes |
//! | Timeout | Yes |
//! | Unavailable | Yes (after delay) |
//! | MalformedResponse | No |
//! | InvalidRequest | No |
//! | UnsupportedLanguagePair | No |
//! | Internal | No |
//!
//! The type is `Clone` because a single provider outcome is shared by every
//! caller joined to the same in-flight invocation.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Request to {provider} timed out after {after_ms}ms")]
    Timeout { provider: &'static str, after_ms: u64 },

    #[error("Provider {provider} is unavailable: {message}")]
    Unavailable {
        provider: &'static str,
        message: String,
        /// Seconds suggested by the remote side before trying again
        retry_after: Option<u64>,
    },

    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        provider: &'static str,
        message: String,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} cannot translate {source_language} to {target_language}")]
    UnsupportedLanguagePair {
        provider: &'static str,
        source_language: String,
        target_language: String,
    },

    #[error("Internal error in {provider}: {message}")]
    Internal {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn unavailable(
        provider: &'static str,
        message: impl Into<String>,
        retry_after: Option<u64>,
    ) -> Self {
        Self::Unavailable {
            provider,
            message: message.into(),
            retry_after,
        }
    }

    pub fn malformed(provider: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider,
            message: message.into(),
        }
    }

    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    pub fn internal(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Internal {
            provider,
            message: message.into(),
        }
    }

    /// Name of the provider that produced the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::Unavailable { provider, .. }
            | Self::MalformedResponse { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::UnsupportedLanguagePair { provider, .. }
            | Self::Internal { provider, .. } => provider,
        }
    }

    /// Check if this error is transient and worth retrying
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Timeout { .. } | Self::Unavailable { .. } => true,

            Self::MalformedResponse { .. }
            | Self::InvalidRequest { .. }
            | Self::UnsupportedLanguagePair { .. }
            | Self::Internal { .. } => false,
        }
    }

    /// Delay in seconds requested by the remote side, if any
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            Self::Unavailable { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::Timeout { .. } => "timeout",
            Self::Unavailable { .. } => "unavailable",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::InvalidRequest { .. } => "invalid_request",
            Self::UnsupportedLanguagePair { .. } => "unsupported_language_pair",
            Self::Internal { .. } => "internal",
        }
    }
}
