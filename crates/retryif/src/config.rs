//! Retry configuration and builder
//!
//! [`RetryConfig`] carries the attempt limit for one retry session. It is
//! plain data: the retry decision itself lives in a
//! [`RetryPolicy`](crate::RetryPolicy). With the `serde` feature enabled a
//! configuration can also be loaded from TOML:
//!
//! ```toml
//! max_attempts = 5
//! ```

#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use tracing::debug;

use crate::constants::{DEFAULT_MAX_ATTEMPTS, MIN_MAX_ATTEMPTS};
use crate::error::{ConfigError, ConfigResult};

/// Configuration for retry behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RetryConfig {
    /// Maximum number of attempts, counting the first one
    pub max_attempts: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_MAX_ATTEMPTS }
    }
}

impl RetryConfig {
    /// Create a configuration builder
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::new()
    }

    /// Shorthand for a validated configuration with the given attempt limit
    ///
    /// # Example
    /// ```
    /// use retryif::RetryConfig;
    ///
    /// let config = RetryConfig::attempts(5).unwrap();
    /// assert_eq!(config.max_attempts, 5);
    /// assert!(RetryConfig::attempts(0).is_err());
    /// ```
    pub fn attempts(max_attempts: u32) -> ConfigResult<Self> {
        Self::builder().max_attempts(max_attempts).build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_attempts < MIN_MAX_ATTEMPTS {
            return Err(ConfigError::InvalidMaxAttempts { max_attempts: self.max_attempts });
        }

        Ok(())
    }

    /// Parse and validate a configuration from a TOML document
    #[cfg(feature = "serde")]
    pub fn from_toml_str(document: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(document).map_err(ConfigError::parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration from a TOML file
    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        debug!(path = %path.display(), "Loaded retry configuration file");
        Self::from_toml_str(&document)
    }
}

/// Builder for RetryConfig with fluent API
#[derive(Debug, Default)]
pub struct RetryConfigBuilder {
    config: RetryConfig,
}

impl RetryConfigBuilder {
    pub fn new() -> Self {
        Self { config: RetryConfig::default() }
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.config.max_attempts = attempts;
        self
    }

    pub fn build(self) -> ConfigResult<RetryConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for retry configuration and its builder.
    use super::*;

    /// The default configuration allows three attempts and is valid.
    #[test]
    fn test_retry_config_default() {
        let config = RetryConfig::default();

        assert_eq!(config.max_attempts, 3);
        assert!(config.validate().is_ok());
    }

    /// Validates `RetryConfig::validate` for the zero attempts scenario.
    ///
    /// Assertions:
    /// - A configuration with one attempt is valid.
    /// - A configuration with zero attempts yields `InvalidMaxAttempts`.
    #[test]
    fn test_retry_config_validation() {
        let mut config = RetryConfig { max_attempts: 1 };
        assert!(config.validate().is_ok());

        config.max_attempts = 0;
        match config.validate() {
            Err(ConfigError::InvalidMaxAttempts { max_attempts }) => assert_eq!(max_attempts, 0),
            other => panic!("expected InvalidMaxAttempts, got {other:?}"),
        }
    }

    /// Tests builder pattern for retry configuration
    #[test]
    fn test_retry_config_builder() {
        let config = RetryConfig::builder().max_attempts(7).build();

        assert!(config.is_ok(), "Valid config should build successfully");
        assert_eq!(config.expect("Builder should create valid config").max_attempts, 7);
    }

    #[test]
    fn test_retry_config_builder_validation_fails() {
        let result = RetryConfig::builder().max_attempts(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_starts_from_default() {
        let config = RetryConfigBuilder::new().build().unwrap();
        assert_eq!(config, RetryConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_str_uses_default_for_missing_field() {
        let config = RetryConfig::from_toml_str("").unwrap();
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }
}
