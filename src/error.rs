//! Error types for the lease-leads crate.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Form validation failures are not errors in this sense — they are values carried by
//! [`crate::validation::ValidationReport`].

use thiserror::Error;

/// Errors that can occur when submitting a lead to the intake API.
#[derive(Error, Debug)]
pub enum LeadApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with LeadApiError
pub type LeadApiResult<T> = Result<T, LeadApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LeadApiError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");

        let err = ConfigError::MissingVar("API_BASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: API_BASE_URL"
        );
    }

    #[test]
    fn test_api_error_variants() {
        let err = LeadApiError::ApiError {
            status: 422,
            message: "Unprocessable".to_string(),
        };
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("Unprocessable"));
    }
}
