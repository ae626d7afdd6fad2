//! Error types for the retry executor
//!
//! Two families of errors meet here:
//!
//! - [`ConfigError`]: the executor refused to start because its configuration
//!   is invalid. Raised before any attempt and never retried.
//! - The operation's own error type `E`: returned to the caller verbatim when
//!   retries are aborted or exhausted. The executor never wraps it.
//!
//! [`ErrorClassification`] lets an error type describe itself as transient so
//! that [`crate::policies::RetryTransient`] can decide without a hand-written
//! predicate.

use std::path::PathBuf;

use thiserror::Error;

use crate::constants::INVALID_MAX_ATTEMPTS_MESSAGE;

/// Errors raised while building or loading a retry configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `max_attempts` was below the minimum of one attempt
    #[error("{message}", message = INVALID_MAX_ATTEMPTS_MESSAGE)]
    InvalidMaxAttempts { max_attempts: u32 },

    /// The configuration document could not be parsed
    #[error("invalid retry configuration: {source}")]
    Parse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The configuration file could not be read
    #[error("failed to read retry configuration from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Classifies errors by whether repeating the failed operation may help
pub trait ErrorClassification {
    /// Returns true when the failure is transient and the operation can be
    /// attempted again
    fn is_retryable(&self) -> bool;
}

impl ConfigError {
    /// Wrap a deserializer error from any configuration format
    pub fn parse<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parse { source: Box::new(error) }
    }
}

impl ErrorClassification for ConfigError {
    fn is_retryable(&self) -> bool {
        // A bad configuration stays bad.
        false
    }
}

/// `Interrupted`, `WouldBlock`, `TimedOut`, `ConnectionReset`,
/// `ConnectionAborted`, `ConnectionRefused`, `BrokenPipe` and `UnexpectedEof`
/// are retryable. Every other kind is treated as permanent.
impl ErrorClassification for std::io::Error {
    fn is_retryable(&self) -> bool {
        use std::io::ErrorKind;

        matches!(
            self.kind(),
            ErrorKind::Interrupted
                | ErrorKind::WouldBlock
                | ErrorKind::TimedOut
                | ErrorKind::ConnectionReset
                | ErrorKind::ConnectionAborted
                | ErrorKind::ConnectionRefused
                | ErrorKind::BrokenPipe
                | ErrorKind::UnexpectedEof
        )
    }
}

impl<E: ErrorClassification + ?Sized> ErrorClassification for Box<E> {
    fn is_retryable(&self) -> bool {
        (**self).is_retryable()
    }
}
