//! Translation provider strategies
//!
//! The orchestrator talks to exactly one [`TranslationProvider`] per
//! invocation, chosen from the current connectivity signal:
//!
//! - [`OnlineProvider`] forwards to a [`RemoteTranslator`] capability
//! - [`OfflineProvider`] produces a degraded local rendering

pub mod error;
pub mod offline;
pub mod online;
pub mod remote;

pub use error::ProviderError;
pub use offline::OfflineProvider;
pub use online::OnlineProvider;
pub use remote::{HttpRemoteTranslator, RemoteTranslation, RemoteTranslator, SimulatedRemote};

use crate::core::types::{PreparedRequest, TranslationResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which translation path a provider implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Online,
    Offline,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Online => write!(f, "online"),
            ProviderKind::Offline => write!(f, "offline"),
        }
    }
}

/// Strategy that turns a validated request into a translation result
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Provider name used in logs and errors
    fn name(&self) -> &'static str;

    fn kind(&self) -> ProviderKind;

    /// Translate a preprocessed request
    async fn invoke(&self, request: &PreparedRequest) -> Result<TranslationResult, ProviderError>;
}
