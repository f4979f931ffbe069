//! Error types for CheckHash
//!
//! This module defines all error types used throughout the service,
//! from digest computation up to server startup.

use thiserror::Error;

/// Main error type for CheckHash operations
#[derive(Error, Debug)]
pub enum CheckHashError {
    /// A required value was absent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An argument was present but out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Hash algorithm not supported
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedHashAlgorithm(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O error while binding or serving
    #[error("I/O error ({context}): {source}")]
    Io {
        /// What was being done when the error occurred
        context: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The operating system random source failed
    #[error("Random source error: {0}")]
    Random(String),

    /// Output serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CheckHashError {
    /// Create an I/O error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Check if this error is a violation of the caller's contract
    /// rather than an environment failure
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InvalidArgument(_))
    }
}

/// Result type alias for CheckHash operations
pub type Result<T> = std::result::Result<T, CheckHashError>;

impl From<std::io::Error> for CheckHashError {
    fn from(err: std::io::Error) -> Self {
        CheckHashError::Io {
            context: String::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CheckHashError {
    fn from(err: serde_json::Error) -> Self {
        CheckHashError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_with_context() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = CheckHashError::io("bind 127.0.0.1:8443", io_err);
        assert!(err.to_string().contains("bind 127.0.0.1:8443"));
        assert!(err.to_string().contains("address in use"));
    }

    #[test]
    fn test_caller_errors() {
        assert!(CheckHashError::InvalidInput("missing".into()).is_caller_error());
        assert!(CheckHashError::InvalidArgument("zero".into()).is_caller_error());
        assert!(!CheckHashError::UnsupportedHashAlgorithm("MD2".into()).is_caller_error());
        assert!(!CheckHashError::config("bad port").is_caller_error());
    }
}
