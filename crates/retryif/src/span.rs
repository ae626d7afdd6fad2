//! Structured logging for retry sessions
//!
//! Events go through the standard `tracing` crate. The operation's error
//! value is never formatted, so no `Debug` bound leaks into the executor API.

use tracing::{debug, warn};

use crate::outcome::StopReason;

/// Name used when a session was not given one
pub const UNNAMED_OPERATION: &str = "operation";

/// Logging handle for a single retry session
#[derive(Debug)]
pub struct RetrySpan<'a> {
    operation_name: &'a str,
    max_attempts: u32,
}

impl<'a> RetrySpan<'a> {
    /// Start a retry session span
    pub fn start(operation_name: &'a str, max_attempts: u32) -> Self {
        debug!(operation = operation_name, max_attempts, "Starting retry session");

        Self { operation_name, max_attempts }
    }

    /// Record a failed attempt
    pub fn record_failure(&self, attempt: u32) {
        debug!(
            operation = %self.operation_name,
            attempt,
            max_attempts = self.max_attempts,
            "Attempt failed"
        );
    }

    /// Record the terminal state of the session
    pub fn record_stop(&self, attempts: u32, reason: StopReason) {
        match reason {
            StopReason::Succeeded if attempts > 1 => debug!(
                operation = %self.operation_name,
                attempts,
                "Operation succeeded after retries"
            ),
            StopReason::Succeeded => {}
            StopReason::Aborted => debug!(
                operation = %self.operation_name,
                attempts,
                "Retry policy declined to retry"
            ),
            StopReason::Exhausted => warn!(
                operation = %self.operation_name,
                attempts,
                "All retry attempts exhausted"
            ),
        }
    }
}
