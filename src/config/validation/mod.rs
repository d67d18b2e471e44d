//! Configuration validation
//!
//! - `trait_def`: core Validate trait definition
//! - `endpoint`: remote endpoint URL checks
//! - `translator_validators`: validators for every configuration section
//! - `tests`: test suite for all validators

mod endpoint;
mod trait_def;
mod translator_validators;

pub use endpoint::validate_endpoint;
pub use trait_def::Validate;
