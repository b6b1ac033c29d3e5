//! Error types for BitLaunch API operations.
//!
//! Provider error payloads are never parsed: a non-200 response surfaces its
//! status code and raw body text, and callers that need finer handling read
//! the body themselves.

use thiserror::Error;

/// Main error type for BitLaunch operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Client or request construction failed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Base URL or request path could not be turned into a URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Request body could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Caller supplied arguments the operation does not accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Could not connect to the API
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Every attempt allowed by the retry budget failed
    #[error("gave up after {attempts} attempts, last error: {last_error}")]
    RetriesExhausted {
        /// Number of attempts made, including the first one
        attempts: u32,
        /// Last transport error or trimmed response body
        last_error: String,
    },

    /// The API answered with a status other than 200
    #[error("error {status} {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response body did not match the expected schema
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Specialized result type for BitLaunch operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::RetriesExhausted { .. } => "RETRIES_EXHAUSTED",
            Self::Api { .. } => "API_ERROR",
            Self::ParseError(_) => "PARSE_ERROR",
        }
    }

    /// HTTP status carried by an [`Error::Api`], if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for failures the transport may retry.
    ///
    /// Transport errors are retryable, as are 429 and 5xx responses other
    /// than 501.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(_) | Self::Timeout(_) | Self::ServiceUnavailable(_) => true,
            Self::Api { status, .. } => {
                *status == 429 || (*status >= 500 && *status != 501 && *status < 600)
            }
            _ => false,
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::ConfigError("test".to_string()).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            Error::InvalidArgument("test".to_string()).error_code(),
            "INVALID_ARGUMENT"
        );
        assert_eq!(Error::Timeout("test".to_string()).error_code(), "TIMEOUT");
        assert_eq!(
            Error::RetriesExhausted {
                attempts: 4,
                last_error: "boom".to_string()
            }
            .error_code(),
            "RETRIES_EXHAUSTED"
        );
        assert_eq!(
            Error::Api {
                status: 404,
                body: "missing".to_string()
            }
            .error_code(),
            "API_ERROR"
        );
        assert_eq!(
            Error::ParseError("test".to_string()).error_code(),
            "PARSE_ERROR"
        );
    }

    #[test]
    fn test_api_error_display_carries_status_and_body() {
        let err = Error::Api {
            status: 403,
            body: "{\"error\":\"forbidden\"}".to_string(),
        };
        assert_eq!(err.to_string(), "error 403 {\"error\":\"forbidden\"}");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_retries_exhausted_display() {
        let err = Error::RetriesExhausted {
            attempts: 4,
            last_error: "\"upstream down\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "gave up after 4 attempts, last error: \"upstream down\""
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_is_retryable() {
        let api = |status| Error::Api {
            status,
            body: String::new(),
        };

        assert!(api(500).is_retryable());
        assert!(api(503).is_retryable());
        assert!(api(429).is_retryable());
        assert!(!api(501).is_retryable());
        assert!(!api(404).is_retryable());
        assert!(!api(400).is_retryable());
        assert!(Error::Timeout("slow".to_string()).is_retryable());
        assert!(!Error::ParseError("bad".to_string()).is_retryable());
        assert!(!Error::InvalidArgument("too many arguments".to_string()).is_retryable());
    }

    #[test]
    fn test_error_partial_eq() {
        let err1 = Error::InvalidArgument("too many arguments".to_string());
        let err2 = Error::InvalidArgument("too many arguments".to_string());
        let err3 = Error::InvalidArgument("other".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
