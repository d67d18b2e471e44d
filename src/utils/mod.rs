//! Utility modules for the translator
//!
//! - **error**: error types, retry and deadline handling
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
