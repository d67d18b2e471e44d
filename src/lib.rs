//! # sign-translate
//!
//! Request orchestrator for spoken-text to sign-language translation.
//!
//! ## Features
//!
//! - **Validation**: every violated rule is reported at once
//! - **FIFO result cache**: bounded, keyed by preprocessed text and languages
//! - **Single-flight**: identical concurrent requests share one provider call
//! - **Online/offline providers**: chosen from an injected connectivity signal
//! - **Retry with backoff**: recoverable failures are retried under a deadline
//! - **Status publishing**: ordered session updates with independent
//!   SignWriting and video channels
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sign_translate::{Config, Orchestrator, TranslationRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = Orchestrator::builder(Config::default()).build()?;
//!     let mut updates = orchestrator.subscribe();
//!
//!     let result = orchestrator
//!         .translate(TranslationRequest::new("Hello world", "en", "asl"))
//!         .await?;
//!     println!("{} ({:.2})", result.translated_text, result.confidence);
//!
//!     while let Ok(update) = updates.try_recv() {
//!         println!("{}", update.state);
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::{
    ConnectivityMonitor, LanguageKind, ManualConnectivity, Notice, NoticeLevel, Orchestrator,
    OrchestratorBuilder, OrchestratorState, StatusUpdate, SupportedLanguages, TranslationRequest,
    TranslationResult, TranslationStats,
};
pub use utils::error::{Result, TranslateError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Crate description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
