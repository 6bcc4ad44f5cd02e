//! Error classification and the standardized error type.
//!
//! Every failed exchange is mapped onto exactly one [`ErrorKind`] and one
//! human-readable message, then packaged as an [`ApiError`]. Classification
//! is pure and total: every transport failure has a kind, with
//! [`ErrorKind::Unknown`] as the exhaustive fallback.

use reqwest::StatusCode;
use thiserror::Error;

use crate::transport::TransportError;

// ============================================================================
// Error Kind
// ============================================================================

/// The closed set of failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Connection-level failure with no response.
    Network,
    /// Request timed out or was aborted before a response arrived.
    Timeout,
    /// 5xx response.
    Server,
    /// 4xx response not covered by a dedicated kind.
    Client,
    /// 401 response.
    Unauthorized,
    /// 403 response.
    Forbidden,
    /// 404 response.
    NotFound,
    /// 422 response.
    Validation,
    /// Anything else.
    Unknown,
}

impl ErrorKind {
    /// Classifies a failed exchange.
    ///
    /// Precedence: no response is split into timeout vs. network first;
    /// with a response, dedicated status codes win over the 4xx/5xx
    /// buckets; statuses outside both buckets fall through to `Unknown`.
    pub fn classify(error: &TransportError) -> Self {
        let Some((status, _)) = error.response() else {
            if error.is_timeout_like() {
                return Self::Timeout;
            }
            return Self::Network;
        };

        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::UNPROCESSABLE_ENTITY => Self::Validation,
            s if s.is_client_error() => Self::Client,
            s if s.is_server_error() => Self::Server,
            _ => Self::Unknown,
        }
    }

    /// Returns the fixed user-facing message for this kind.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Network => "Network error. Please check your internet connection.",
            Self::Timeout => "Request timeout. Please try again.",
            Self::Server => "Server error. Please try again later.",
            Self::Client => "Bad request. Please check your input.",
            Self::Unauthorized => "Unauthorized. Please login again.",
            Self::Forbidden => {
                "Access forbidden. You don't have permission to access this resource."
            }
            Self::NotFound => "Resource not found.",
            Self::Validation => "Validation error. Please check your input.",
            Self::Unknown => "An unexpected error occurred",
        }
    }

    /// Returns the wire-style name for this kind, used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT_ERROR",
            Self::Server => "SERVER_ERROR",
            Self::Client => "CLIENT_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "VALIDATION_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Standardized Error
// ============================================================================

/// The standardized error produced once per terminal failure.
///
/// Immutable after construction. The original transport failure is kept as
/// the error source; the raw response body, when one exists, is kept in
/// `data` so callers can inspect server-provided detail.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    /// Failure category.
    pub kind: ErrorKind,
    /// Resolved human-readable message.
    pub message: String,
    /// Response status code, if a response was received.
    pub status: Option<StatusCode>,
    /// Raw response body, if a response was received.
    pub data: Option<serde_json::Value>,
    /// The original failure.
    #[source]
    pub source: TransportError,
}

impl ApiError {
    /// Builds the standardized error for a failed exchange.
    ///
    /// The kind's default message is used unless the response body carries
    /// a `message`, `error`, or `detail` string field (checked in that
    /// order).
    pub fn from_transport(source: TransportError) -> Self {
        let kind = ErrorKind::classify(&source);
        let (status, data) = match source.response() {
            Some((status, body)) => (Some(status), Some(body.clone())),
            None => (None, None),
        };

        let message = data
            .as_ref()
            .and_then(body_message)
            .unwrap_or_else(|| kind.default_message().to_string());

        Self {
            kind,
            message,
            status,
            data,
            source,
        }
    }

    /// Builds the error for a success body that failed to decode.
    pub fn decode(status: StatusCode, error: &serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::Unknown,
            message: format!("Failed to decode response body: {error}"),
            status: Some(status),
            data: None,
            source: TransportError::Other(error.to_string()),
        }
    }
}

/// Extracts a server-provided message from a structured error body.
fn body_message(body: &serde_json::Value) -> Option<String> {
    let object = body.as_object()?;
    for key in ["message", "error", "detail"] {
        if let Some(text) = object.get(key).and_then(serde_json::Value::as_str) {
            return Some(text.to_string());
        }
    }
    None
}

// ============================================================================
// Tests
// ============================================================================
