//! Error types for image-dl
//!
//! This module provides error handling for the library, including:
//! - Domain-specific error types (fetch, storage, validation)
//! - HTTP status code mapping for API integration
//! - Structured error responses with machine-readable error codes

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias for image-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for image-dl
///
/// Used for everything that crosses a component boundary as an error. Per-item
/// fetch failures are the exception: workers convert them into
/// [`Outcome::Failed`](crate::types::Outcome) data and they never surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "storage_dir")
        key: Option<String>,
    },

    /// Invalid input supplied by a caller
    #[error("{0}")]
    Validation(String),

    /// Stored image not found
    #[error("image not found: {0}")]
    NotFound(String),

    /// Per-item fetch/persist failure, surfaced as an error only on
    /// single-item code paths (never through the batch orchestrator)
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Network error from the HTTP client
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Per-item failure while fetching or persisting one image
///
/// A worker converts every one of these into a `Failed` outcome; the variant
/// carries enough context to produce a useful per-URL error string.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request itself failed (connect, timeout, protocol)
    #[error("request to {url} failed: {reason}")]
    Request {
        /// The URL that was being fetched
        url: String,
        /// Why the request failed
        reason: String,
    },

    /// The server answered with a non-success status
    #[error("unexpected status {status} fetching {url}")]
    Status {
        /// The URL that was being fetched
        url: String,
        /// The HTTP status code returned
        status: u16,
    },

    /// The response body could not be read
    #[error("failed to read body from {url}: {reason}")]
    Body {
        /// The URL that was being fetched
        url: String,
        /// Why the body read failed
        reason: String,
    },

    /// The fetched bytes could not be written to storage
    #[error("failed to store {key}: {reason}")]
    Store {
        /// The local key the bytes were being written under
        key: String,
        /// Why the write failed
        reason: String,
    },
}

/// API error response format
///
/// Returned by API endpoints when an error occurs, with a machine-readable
/// code, a human-readable message, and optional contextual details.
///
/// # Example JSON Response
///
/// ```json
/// {
///   "error": {
///     "code": "not_found",
///     "message": "image not found: abc.png",
///     "details": {
///       "name": "abc.png"
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// The error details
    pub error: ErrorDetail,
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "not_found", "validation_error")
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional context about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    /// Create an API error with additional details
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }

    /// Create a "not found" error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new("not_found", format!("{} not found", resource.into()))
    }

    /// Create a "validation error" error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("validation_error", message)
    }

    /// Create an "internal server error"
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }
}

/// Convert errors to HTTP status codes for API responses
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - Client error (invalid input)
            Error::Config { .. } => 400,
            Error::Validation(_) => 400,

            // 404 Not Found
            Error::NotFound(_) => 404,

            // 502 Bad Gateway - the upstream image server failed us
            Error::Fetch(_) => 502,
            Error::Network(_) => 502,

            // 500 Internal Server Error - Server-side issues
            Error::Io(_) => 500,
            Error::Serialization(_) => 500,
            Error::ApiServerError(_) => 500,
            Error::Other(_) => 500,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::Config { .. } => "config_error",
            Error::Validation(_) => "validation_error",
            Error::NotFound(_) => "not_found",
            Error::Fetch(e) => match e {
                FetchError::Request { .. } => "fetch_request_failed",
                FetchError::Status { .. } => "fetch_bad_status",
                FetchError::Body { .. } => "fetch_body_failed",
                FetchError::Store { .. } => "store_failed",
            },
            Error::Network(_) => "network_error",
            Error::Io(_) => "io_error",
            Error::Serialization(_) => "serialization_error",
            Error::ApiServerError(_) => "api_server_error",
            Error::Other(_) => "internal_error",
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let code = error.error_code().to_string();
        let message = error.to_string();

        // Add contextual details for specific error types
        let details = match &error {
            Error::Fetch(FetchError::Request { url, .. }) => Some(serde_json::json!({
                "url": url,
            })),
            Error::Fetch(FetchError::Status { url, status }) => Some(serde_json::json!({
                "url": url,
                "status": status,
            })),
            Error::Fetch(FetchError::Body { url, .. }) => Some(serde_json::json!({
                "url": url,
            })),
            Error::Fetch(FetchError::Store { key, .. }) => Some(serde_json::json!({
                "key": key,
            })),
            Error::Config {
                key: Some(config_key),
                ..
            } => Some(serde_json::json!({
                "key": config_key,
            })),
            _ => None,
        };

        ApiError {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        }
    }
}
