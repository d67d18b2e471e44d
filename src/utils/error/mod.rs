//! Error Handling utilities
//!
//! This module provides the crate-wide error type and the retry/timeout
//! recovery helpers used around provider invocations.

pub mod error;
pub mod recovery;

// Re-export commonly used types
pub use error::*;
pub use recovery::*;
