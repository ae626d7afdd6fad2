// Constants for the retry executor

/// Default maximum number of attempts (including the first one)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Minimum allowed max_attempts value
pub const MIN_MAX_ATTEMPTS: u32 = 1;

/// Message reported when max_attempts is below [`MIN_MAX_ATTEMPTS`]
pub const INVALID_MAX_ATTEMPTS_MESSAGE: &str = "number of retries must be greater than 0";
