//! Error handling for the translator
//!
//! This module defines the error type returned by every public operation.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod types;

pub use types::{Result, TranslateError};
