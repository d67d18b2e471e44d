//! Core functionality for the translator
//!
//! This module contains the request pipeline and its data structures:
//! validation, caching, provider strategies, connectivity, status
//! publishing and the orchestrator tying them together.

pub mod cache_manager;
pub mod connectivity;
pub mod languages;
pub mod orchestrator;
pub mod providers;
pub mod status;
pub mod types;
pub mod validator;

pub use connectivity::{ConnectivityMonitor, ManualConnectivity};
pub use languages::{LanguageDetails, LanguageInfo, LanguageKind, SupportedLanguages};
pub use orchestrator::{Orchestrator, OrchestratorBuilder, OrchestratorState, TranslationStats};
pub use status::{Notice, NoticeLevel, SessionError, StatusUpdate};
pub use types::{TranslationRequest, TranslationResult};
