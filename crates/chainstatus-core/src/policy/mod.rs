//! Reliability policies applied by transports.
//!
//! Retry belongs to the transport layer. Status providers never retry.

pub mod retry;

pub use retry::{RetryConfig, RetryPolicy};
