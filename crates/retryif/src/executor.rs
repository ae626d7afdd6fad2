//! Retry executor
//!
//! The executor runs an operation, and after each failure asks its
//! [`RetryPolicy`] whether to run it again, up to
//! [`RetryConfig::max_attempts`] invocations in total. There is no delay
//! between attempts; each invocation completes before the next decision.
//!
//! The failure returned to the caller is the one produced by the last
//! invocation, unchanged. Earlier failures are dropped.

use std::future::Future;

use tracing::instrument;

use crate::config::RetryConfig;
use crate::error::ConfigResult;
use crate::outcome::{RetryOutcome, StopReason};
use crate::policy::RetryPolicy;
use crate::span::{RetrySpan, UNNAMED_OPERATION};

/// The main retry executor
#[derive(Debug, Clone)]
pub struct RetryExecutor<P> {
    config: RetryConfig,
    policy: P,
    name: Option<String>,
}

impl<P> RetryExecutor<P> {
    /// Create a new retry executor with the given configuration and policy
    ///
    /// Fails with [`ConfigError::InvalidMaxAttempts`] when the configuration
    /// allows no attempts at all.
    ///
    /// [`ConfigError::InvalidMaxAttempts`]: crate::ConfigError::InvalidMaxAttempts
    pub fn new(config: RetryConfig, policy: P) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config, policy, name: None })
    }

    /// Create with default configuration
    pub fn with_policy(policy: P) -> Self {
        Self { config: RetryConfig::default(), policy, name: None }
    }

    /// Name the operation in log events
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    fn operation_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_OPERATION)
    }

    /// Execute an operation with retry logic
    pub fn execute<F, T, E>(&self, operation: F) -> Result<T, E>
    where
        P: RetryPolicy<E>,
        F: FnMut() -> Result<T, E>,
    {
        self.execute_with_outcome(operation).into_result()
    }

    /// Execute an operation with retry logic and return outcome statistics.
    #[instrument(
        level = "debug",
        skip(self, operation),
        fields(operation_name = %self.operation_name(), max_attempts = self.config.max_attempts)
    )]
    pub fn execute_with_outcome<F, T, E>(&self, mut operation: F) -> RetryOutcome<T, E>
    where
        P: RetryPolicy<E>,
        F: FnMut() -> Result<T, E>,
    {
        let span = RetrySpan::start(self.operation_name(), self.config.max_attempts);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let result = operation();

            if let Some(reason) = self.stop_reason(&result, attempt, &span) {
                return Self::finish(&span, result, attempt, reason);
            }
        }
    }

    /// Execute an asynchronous operation with retry logic
    ///
    /// Attempts are awaited one at a time; the executor adds no timers and
    /// no concurrency of its own.
    pub async fn execute_async<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        P: RetryPolicy<E>,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.execute_async_with_outcome(operation).await.into_result()
    }

    /// Execute an asynchronous operation and return outcome statistics.
    #[instrument(
        level = "debug",
        skip(self, operation),
        fields(operation_name = %self.operation_name(), max_attempts = self.config.max_attempts)
    )]
    pub async fn execute_async_with_outcome<F, Fut, T, E>(
        &self,
        mut operation: F,
    ) -> RetryOutcome<T, E>
    where
        P: RetryPolicy<E>,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let span = RetrySpan::start(self.operation_name(), self.config.max_attempts);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let result = operation().await;

            if let Some(reason) = self.stop_reason(&result, attempt, &span) {
                return Self::finish(&span, result, attempt, reason);
            }
        }
    }

    /// Decide whether the session ends after `attempt` produced `result`.
    ///
    /// The policy is consulted for every failure, the last allowed one
    /// included; a veto there reports `Aborted` rather than `Exhausted`.
    fn stop_reason<T, E>(
        &self,
        result: &Result<T, E>,
        attempt: u32,
        span: &RetrySpan<'_>,
    ) -> Option<StopReason>
    where
        P: RetryPolicy<E>,
    {
        let Err(error) = result else {
            return Some(StopReason::Succeeded);
        };

        span.record_failure(attempt);

        if !self.policy.should_retry(error) {
            return Some(StopReason::Aborted);
        }
        if attempt >= self.config.max_attempts {
            return Some(StopReason::Exhausted);
        }

        None
    }

    fn finish<T, E>(
        span: &RetrySpan<'_>,
        result: Result<T, E>,
        attempts: u32,
        stop_reason: StopReason,
    ) -> RetryOutcome<T, E> {
        span.record_stop(attempts, stop_reason);
        RetryOutcome { result, attempts, stop_reason }
    }
}

/// Validate `config`, then run `operation` under `policy`
///
/// The outer `Result` reports configuration errors, raised before the
/// operation is ever invoked; the inner one is the operation's own outcome.
///
/// # Example
/// ```
/// use retryif::{retry_with_policy, RetryConfig};
///
/// let mut attempts = 0;
/// let result = retry_with_policy(
///     RetryConfig { max_attempts: 5 },
///     |err: &&str| *err == "temporary failure",
///     || {
///         attempts += 1;
///         if attempts < 3 { Err("temporary failure") } else { Ok("success") }
///     },
/// );
///
/// assert_eq!(result.unwrap(), Ok("success"));
/// assert_eq!(attempts, 3);
/// ```
pub fn retry_with_policy<F, T, E, P>(
    config: RetryConfig,
    policy: P,
    operation: F,
) -> ConfigResult<Result<T, E>>
where
    F: FnMut() -> Result<T, E>,
    P: RetryPolicy<E>,
{
    let executor = RetryExecutor::new(config, policy)?;
    Ok(executor.execute(operation))
}

/// Convenience function to retry with default configuration
pub fn retry<F, T, E, P>(policy: P, operation: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    P: RetryPolicy<E>,
{
    RetryExecutor::with_policy(policy).execute(operation)
}
