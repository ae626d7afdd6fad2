//! Testing utilities for code built on the retry executor
//!
//! - [`ScriptedOperation`]: replays a fixed sequence of results and counts
//!   how many times it was invoked
//! - [`CountingPolicy`]: wraps a policy and counts how many times it was
//!   consulted
//!
//! ```
//! use retryif::policies::AlwaysRetry;
//! use retryif::testing::{CountingPolicy, ScriptedOperation};
//! use retryif::{RetryConfig, RetryExecutor};
//!
//! let operation = ScriptedOperation::failing_then(2, "temporary failure", "success");
//! let executor =
//!     RetryExecutor::new(RetryConfig::attempts(5).unwrap(), CountingPolicy::new(AlwaysRetry))
//!         .unwrap();
//!
//! assert_eq!(executor.execute(|| operation.call()), Ok("success"));
//! assert_eq!(operation.invocations(), 3);
//! assert_eq!(executor.policy().evaluations(), 2);
//! ```

use std::cell::Cell;
use std::future::{ready, Ready};

use crate::policy::RetryPolicy;

/// Operation that replays a script of results
///
/// The last step repeats once the script runs out, so
/// `ScriptedOperation::new(Err(e))` fails forever.
#[derive(Debug)]
pub struct ScriptedOperation<T, E> {
    steps: Vec<Result<T, E>>,
    invocations: Cell<u32>,
}

impl<T: Clone, E: Clone> ScriptedOperation<T, E> {
    /// Create a script whose first step is `first`
    pub fn new(first: Result<T, E>) -> Self {
        Self { steps: vec![first], invocations: Cell::new(0) }
    }

    /// Fail `failures` times with `error`, then succeed with `value`
    pub fn failing_then(failures: u32, error: E, value: T) -> Self {
        let mut steps: Vec<Result<T, E>> =
            (0..failures).map(|_| Err(error.clone())).collect();
        steps.push(Ok(value));
        Self { steps, invocations: Cell::new(0) }
    }

    /// Append a step to the script
    #[must_use]
    pub fn then(mut self, step: Result<T, E>) -> Self {
        self.steps.push(step);
        self
    }

    /// Invoke the operation, advancing the script
    pub fn call(&self) -> Result<T, E> {
        let invocation = self.invocations.get();
        self.invocations.set(invocation + 1);

        let index = usize::try_from(invocation).unwrap_or(usize::MAX);
        let last = self.steps.len() - 1;
        self.steps[index.min(last)].clone()
    }

    /// Invoke the operation as a ready future
    pub fn call_async(&self) -> Ready<Result<T, E>> {
        ready(self.call())
    }

    /// Number of times the operation has been invoked
    pub fn invocations(&self) -> u32 {
        self.invocations.get()
    }
}

/// Policy wrapper that counts evaluations of the inner policy
#[derive(Debug, Default)]
pub struct CountingPolicy<P> {
    inner: P,
    evaluations: Cell<u32>,
}

impl<P> CountingPolicy<P> {
    pub fn new(inner: P) -> Self {
        Self { inner, evaluations: Cell::new(0) }
    }

    /// Number of times `should_retry` has been called
    pub fn evaluations(&self) -> u32 {
        self.evaluations.get()
    }
}

impl<P, E> RetryPolicy<E> for CountingPolicy<P>
where
    P: RetryPolicy<E>,
{
    fn should_retry(&self, error: &E) -> bool {
        self.evaluations.set(self.evaluations.get() + 1);
        self.inner.should_retry(error)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for testing helpers.
    use super::*;
    use crate::policies::NeverRetry;

    /// Validates `ScriptedOperation` replay for the exhausted script scenario.
    ///
    /// Assertions:
    /// - Steps are returned in order.
    /// - The final step repeats after the script runs out.
    /// - Every call is counted.
    #[test]
    fn test_scripted_operation_replays_and_repeats_last() {
        let operation = ScriptedOperation::<u8, &str>::new(Err("first")).then(Ok(7));

        assert_eq!(operation.call(), Err("first"));
        assert_eq!(operation.call(), Ok(7));
        assert_eq!(operation.call(), Ok(7));
        assert_eq!(operation.invocations(), 3);
    }

    #[test]
    fn test_failing_then() {
        let operation = ScriptedOperation::failing_then(2, "temporary failure", "success");

        assert_eq!(operation.call(), Err("temporary failure"));
        assert_eq!(operation.call(), Err("temporary failure"));
        assert_eq!(operation.call(), Ok("success"));
    }

    #[test]
    fn test_counting_policy() {
        let policy = CountingPolicy::new(NeverRetry);

        assert!(!policy.should_retry(&"error"));
        assert!(!policy.should_retry(&"error"));
        assert_eq!(policy.evaluations(), 2);
    }
}
