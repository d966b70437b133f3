//! Error types and handling for `TourAI`

use thiserror::Error;

/// Classification of failures talking to the external services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The request did not complete within the configured timeout
    ApiTimeout,
    /// The service answered with a body we could not decode
    ApiInvalidResponse,
    /// The service answered with a non-success HTTP status
    ApiHttpStatus,
    /// Connection-level failure (DNS, refused, reset)
    NetworkError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            ErrorCode::ApiTimeout => "API_TIMEOUT",
            ErrorCode::ApiInvalidResponse => "API_INVALID_RESPONSE",
            ErrorCode::ApiHttpStatus => "API_HTTP_STATUS",
            ErrorCode::NetworkError => "NETWORK_ERROR",
        };
        f.write_str(code)
    }
}

/// Main error type for the `TourAI` application
#[derive(Error, Debug)]
pub enum TourAiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// External service communication errors
    #[error("API error ({code}): {message}")]
    Api { message: String, code: ErrorCode },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TourAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error for a connection-level failure
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::api_with_code(message, ErrorCode::NetworkError)
    }

    /// Create a new API error with an explicit code
    pub fn api_with_code<S: Into<String>>(message: S, code: ErrorCode) -> Self {
        Self::Api {
            message: message.into(),
            code,
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Error code of an API error, if this is one
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            TourAiError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TourAiError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            TourAiError::Api {
                code: ErrorCode::ApiTimeout,
                ..
            } => "The travel data service took too long to answer. Please try again.".to_string(),
            TourAiError::Api { .. } => {
                "Unable to connect to external services. Please check your internet connection."
                    .to_string()
            }
            TourAiError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TourAiError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TourAiError::General { message } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for TourAiError {
    fn from(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            ErrorCode::ApiTimeout
        } else if err.is_decode() {
            ErrorCode::ApiInvalidResponse
        } else if err.is_status() {
            ErrorCode::ApiHttpStatus
        } else {
            ErrorCode::NetworkError
        };
        Self::api_with_code(err.to_string(), code)
    }
}
