//! Remote translation capability
//!
//! The online provider only depends on the request/response contract below;
//! the transport is an implementation detail of each [`RemoteTranslator`].

mod http;
mod simulated;

pub use http::HttpRemoteTranslator;
pub use simulated::SimulatedRemote;

use super::ProviderError;
use crate::core::types::PreparedRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Payload returned by the remote translation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTranslation {
    pub translated_text: String,
    pub confidence: f64,
    pub sign_writing: String,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// Capability that performs the actual linguistic translation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteTranslator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn translate(&self, request: &PreparedRequest)
    -> Result<RemoteTranslation, ProviderError>;
}
