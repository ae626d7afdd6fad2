//! Predicate-driven retries for fallible operations.
//!
//! A [`RetryExecutor`] invokes a zero-argument operation returning
//! `Result<T, E>` up to [`RetryConfig::max_attempts`] times. After each
//! failure it asks a [`RetryPolicy`] whether to try again. The loop stops on
//! the first success, on the first failure the policy declines, or when the
//! attempt limit is reached, and the last invocation's result is returned
//! unchanged.
//!
//! There is no backoff, jitter or timeout: attempts run back to back on the
//! calling thread (or task, for [`RetryExecutor::execute_async`]).
//!
//! ```
//! use retryif::{retry_with_policy, RetryConfig};
//!
//! let result: Result<(), &str> = retry_with_policy(
//!     RetryConfig::attempts(3).unwrap(),
//!     |_: &&str| true,
//!     || Err("persistent failure"),
//! )
//! .unwrap();
//!
//! assert_eq!(result, Err("persistent failure"));
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize [`RetryConfig`] and load it from TOML
//! - `test-utils`: scripted operations and counting policies in [`testing`]

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod config;
pub mod constants;
pub mod error;
pub mod executor;
pub mod outcome;
pub mod policy;
pub mod span;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
pub use config::{RetryConfig, RetryConfigBuilder};
pub use error::{ConfigError, ConfigResult, ErrorClassification};
pub use executor::{retry, retry_with_policy, RetryExecutor};
pub use outcome::{RetryOutcome, StopReason};
pub use policy::{policies, RetryPolicy};
