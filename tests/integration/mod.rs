//! Integration tests for sign-translate
//!
//! These tests drive the orchestrator through its public API with providers
//! whose timing is controlled by the test.

pub mod cache_tests;
pub mod connectivity_tests;
pub mod http_remote_tests;
pub mod session_tests;
pub mod single_flight_tests;
