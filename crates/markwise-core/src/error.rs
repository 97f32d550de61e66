//! Error types for markwise-core.
//!
//! Text analysis itself is infallible; these cover the surrounding plumbing.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by the evaluation provider catalogue.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProviderError {
    /// No provider with the requested id exists in the catalogue.
    #[error("unknown provider: {id}. Use: {available}")]
    Unknown {
        /// The provider id that was requested.
        id: String,
        /// Comma-separated list of available provider ids.
        available: String,
    },

    /// The catalogue was already initialized (explicitly or lazily).
    #[error("provider catalogue already initialized")]
    AlreadyInitialized,

    /// The provider requires an API key and none was supplied.
    #[error("API key is required for {provider}")]
    MissingApiKey {
        /// Display name of the provider.
        provider: String,
    },
}

/// Errors raised when accepting document input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// Input exceeds the configured size limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// Size of the rejected input in bytes.
        size: usize,
        /// The configured limit in bytes.
        limit: usize,
    },
}

/// Reject `text` if it is larger than `max_bytes`.
///
/// `None` disables the check.
pub fn check_input_size(text: &str, max_bytes: Option<usize>) -> Result<(), InputError> {
    if let Some(limit) = max_bytes
        && text.len() > limit
    {
        return Err(InputError::TooLarge {
            size: text.len(),
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_within_limit_passes() {
        assert!(check_input_size("hello", Some(5)).is_ok());
        assert!(check_input_size("hello", None).is_ok());
    }

    #[test]
    fn input_over_limit_fails() {
        let err = check_input_size("hello!", Some(5)).unwrap_err();
        assert_eq!(err, InputError::TooLarge { size: 6, limit: 5 });
        assert!(err.to_string().contains("limit: 5"));
    }
}
