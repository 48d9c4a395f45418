//! # HTTP Errors
//!
//! Transport-level failures of calls to remote collaborator services.
//!
//! # Examples
//!
//! ```
//! use vehicles_api::infrastructure::http::HttpError;
//!
//! let error = HttpError::timeout("request timed out after 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = HttpError::not_found("no such vehicle");
//! assert!(error.is_not_found());
//! ```

use thiserror::Error;

/// Error type for remote HTTP calls.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    /// Request timed out.
    #[error("http timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error, including 5xx responses.
    #[error("http connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The remote resource does not exist (404).
    #[error("http not found: {message}")]
    NotFound {
        /// Error message.
        message: String,
    },

    /// The remote rejected the request parameters (400).
    #[error("http invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure (401/403).
    #[error("http authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded (429).
    #[error("http rate limited: {message}")]
    RateLimited {
        /// Error message.
        message: String,
    },

    /// Unexpected status or undecodable body.
    #[error("http protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// Client-side failure, e.g. the client could not be built.
    #[error("http internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl HttpError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if a caller could reasonably retry the request.
    ///
    /// Nothing in this crate retries; the flag is for outer layers.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::RateLimited { .. }
        )
    }

    /// Returns true for a 404 from the remote.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for HTTP calls.
pub type HttpResult<T> = Result<T, HttpError>;
