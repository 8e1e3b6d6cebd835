//! Domain error types
//!
//! This module defines the error hierarchy for Summit. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Summit error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum SummitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Event API errors
    #[error("Event API error: {0}")]
    Api(#[from] ApiError),

    /// Dataset payload carried no partner records
    #[error("Dataset contains no partner records")]
    EmptyInput,

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Event API errors
///
/// Errors that occur when talking to the event endpoints.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to reach the event API
    #[error("Failed to connect to event API: {0}")]
    ConnectionFailed(String),

    /// Authentication failed (bad or expired user key)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Response body could not be interpreted
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after: {0}")]
    RateLimitExceeded(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for SummitError {
    fn from(err: std::io::Error) -> Self {
        SummitError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SummitError {
    fn from(err: serde_json::Error) -> Self {
        SummitError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SummitError {
    fn from(err: toml::de::Error) -> Self {
        SummitError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summit_error_display() {
        let err = SummitError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_empty_input_display() {
        let err = SummitError::EmptyInput;
        assert_eq!(err.to_string(), "Dataset contains no partner records");
    }

    #[test]
    fn test_api_error_conversion() {
        let api_err = ApiError::ConnectionFailed("Network error".to_string());
        let summit_err: SummitError = api_err.into();
        assert!(matches!(summit_err, SummitError::Api(_)));
    }

    #[test]
    fn test_client_error_carries_status() {
        let err = ApiError::ClientError {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "Client error: 403 - Forbidden");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let summit_err: SummitError = io_err.into();
        assert!(matches!(summit_err, SummitError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let summit_err: SummitError = json_err.into();
        assert!(matches!(summit_err, SummitError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let summit_err: SummitError = toml_err.into();
        assert!(matches!(summit_err, SummitError::Configuration(_)));
        assert!(summit_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_summit_error_implements_std_error() {
        let err = SummitError::Validation("Test error".to_string());
        // Verify it implements std::error::Error
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_api_error_implements_std_error() {
        let err = ApiError::ConnectionFailed("Test error".to_string());
        // Verify it implements std::error::Error
        let _: &dyn std::error::Error = &err;
    }
}
