//! Retry policies
//!
//! A [`RetryPolicy`] is consulted after every failed attempt and answers one
//! question: should the operation run again? Any `Fn(&E) -> bool` closure is a
//! policy, so most callers never name a type from this module:
//!
//! ```
//! use retryif::{RetryConfig, RetryExecutor};
//!
//! let executor = RetryExecutor::new(RetryConfig::attempts(5).unwrap(), |err: &String| {
//!     err.as_str() == "temporary failure"
//! })
//! .unwrap();
//!
//! let result: Result<(), String> = executor.execute(|| Err("permanent failure".to_string()));
//! assert_eq!(result.unwrap_err(), "permanent failure");
//! ```

use std::fmt;

/// Trait for determining whether a failed operation should be attempted again
pub trait RetryPolicy<E> {
    /// Return true to run the operation again after `error`
    fn should_retry(&self, error: &E) -> bool;
}

impl<E, F> RetryPolicy<E> for F
where
    F: Fn(&E) -> bool,
{
    fn should_retry(&self, error: &E) -> bool {
        self(error)
    }
}

/// Pre-defined retry policies for common scenarios
pub mod policies {
    use super::{fmt, RetryPolicy};
    use crate::error::ErrorClassification;

    /// Always retry policy - retries on any error
    #[derive(Debug, Clone, Copy, Default)]
    pub struct AlwaysRetry;

    impl<E> RetryPolicy<E> for AlwaysRetry {
        fn should_retry(&self, _error: &E) -> bool {
            true
        }
    }

    /// Never retry policy - the first failure is final
    #[derive(Debug, Clone, Copy, Default)]
    pub struct NeverRetry;

    impl<E> RetryPolicy<E> for NeverRetry {
        fn should_retry(&self, _error: &E) -> bool {
            false
        }
    }

    /// Retries errors that classify themselves as transient
    ///
    /// For `std::io::Error` this covers connection drops, refusals, timeouts
    /// and short reads; see [`ErrorClassification`].
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RetryTransient;

    impl<E: ErrorClassification> RetryPolicy<E> for RetryTransient {
        fn should_retry(&self, error: &E) -> bool {
            error.is_retryable()
        }
    }

    /// Predicate-based retry policy with a readable `Debug` representation
    pub struct RetryWhen<F> {
        name: &'static str,
        predicate: F,
    }

    impl<F> RetryWhen<F> {
        pub fn new(predicate: F) -> Self {
            Self { name: "predicate", predicate }
        }

        /// Label the predicate for logs and debug output
        #[must_use]
        pub fn named(mut self, name: &'static str) -> Self {
            self.name = name;
            self
        }

        pub fn name(&self) -> &'static str {
            self.name
        }
    }

    impl<F> fmt::Debug for RetryWhen<F> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("RetryWhen").field("name", &self.name).finish_non_exhaustive()
        }
    }

    impl<F, E> RetryPolicy<E> for RetryWhen<F>
    where
        F: Fn(&E) -> bool,
    {
        fn should_retry(&self, error: &E) -> bool {
            (self.predicate)(error)
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for retry policies.
    use std::io::{Error as IoError, ErrorKind};

    use super::policies::*;
    use super::*;

    /// Validates `AlwaysRetry` for the always retry policy scenario.
    ///
    /// Assertions:
    /// - Confirms `policy.should_retry(&error)` is true for any error.
    #[test]
    fn test_always_retry_policy() {
        let policy = AlwaysRetry;
        assert!(policy.should_retry(&"error".to_string()));
        assert!(policy.should_retry(&42_u8));
    }

    #[test]
    fn test_never_retry_policy() {
        let policy = NeverRetry;
        assert!(!policy.should_retry(&"error".to_string()));
    }

    /// Closures are policies without any wrapper.
    #[test]
    fn test_closure_policy() {
        let policy = |error: &String| error.contains("retry");

        assert!(policy.should_retry(&"retryable".to_string()));
        assert!(!policy.should_retry(&"fatal".to_string()));
    }

    /// Validates `RetryWhen::new` for the named predicate scenario.
    ///
    /// Assertions:
    /// - Decisions come from the wrapped predicate.
    /// - `Debug` output carries the configured name.
    #[test]
    fn test_retry_when_policy() {
        let policy = RetryWhen::new(|error: &&str| *error == "temporary failure")
            .named("temporary-only");

        assert!(policy.should_retry(&"temporary failure"));
        assert!(!policy.should_retry(&"persistent failure"));
        assert_eq!(policy.name(), "temporary-only");
        assert!(format!("{policy:?}").contains("temporary-only"));
    }

    #[test]
    fn test_retry_transient_policy() {
        let policy = RetryTransient;

        assert!(policy.should_retry(&IoError::from(ErrorKind::TimedOut)));
        assert!(!policy.should_retry(&IoError::from(ErrorKind::NotFound)));
    }
}
