//! Outcome of a retry session

use std::fmt;

/// Terminal state reached by a retry session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The most recent attempt succeeded
    Succeeded,
    /// The policy declined to retry the most recent failure
    Aborted,
    /// Every allowed attempt failed
    Exhausted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "succeeded"),
            Self::Aborted => write!(f, "aborted"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Outcome of a retry execution including result and summary statistics.
///
/// `result` is exactly what the last invocation of the operation returned;
/// earlier failures are discarded.
#[derive(Debug)]
pub struct RetryOutcome<T, E> {
    pub result: Result<T, E>,
    /// Number of times the operation was invoked
    pub attempts: u32,
    pub stop_reason: StopReason,
}

impl<T, E> RetryOutcome<T, E> {
    /// Consume the outcome and return only the result.
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }

    pub fn is_success(&self) -> bool {
        self.stop_reason == StopReason::Succeeded
    }

    /// Number of invocations after the first one.
    pub fn retries(&self) -> u32 {
        self.attempts.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for retry outcomes.
    use super::*;

    /// Validates `RetryOutcome` accessors for the exhausted scenario.
    ///
    /// Assertions:
    /// - `retries()` counts invocations after the first.
    /// - `is_success()` is false for a non-success stop reason.
    /// - `into_result()` returns the stored failure.
    #[test]
    fn test_outcome_accessors() {
        let outcome: RetryOutcome<(), &str> = RetryOutcome {
            result: Err("persistent failure"),
            attempts: 3,
            stop_reason: StopReason::Exhausted,
        };

        assert_eq!(outcome.retries(), 2);
        assert!(!outcome.is_success());
        assert_eq!(outcome.into_result(), Err("persistent failure"));
    }

    #[test]
    fn test_stop_reason_display() {
        assert_eq!(StopReason::Succeeded.to_string(), "succeeded");
        assert_eq!(StopReason::Aborted.to_string(), "aborted");
        assert_eq!(StopReason::Exhausted.to_string(), "exhausted");
    }
}
