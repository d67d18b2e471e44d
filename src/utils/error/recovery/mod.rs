//! Error recovery and resilience utilities
//!
//! Retry with exponential backoff and deadline protection for provider calls.

mod resilience;
mod retry;
mod types;

pub use resilience::TimeoutWrapper;
pub use retry::RetryPolicy;
pub use types::RetryConfig;
