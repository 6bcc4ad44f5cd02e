//! The transport boundary.
//!
//! The pipeline is written against the [`Transport`] trait rather than a
//! concrete HTTP client: one attempt in, one response or one
//! [`TransportError`] out. The default implementation lives in
//! [`crate::host::http`]; tests substitute scripted mocks.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

// ============================================================================
// Request
// ============================================================================

/// Descriptor for one HTTP request.
///
/// A descriptor is owned by one logical call; on retry the pipeline
/// re-sends the same descriptor rather than rebuilding it.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl Request {
    /// Creates a GET request.
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a POST request with a JSON body.
    pub fn post(url: Url, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            url,
            headers: HeaderMap::new(),
            body: Some(body),
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// A completed 2xx exchange.
#[derive(Debug, Clone)]
pub struct Response {
    /// Response status code.
    pub status: StatusCode,
    /// Parsed JSON body (`Null` for empty bodies).
    pub body: serde_json::Value,
}

impl Response {
    /// Creates a response from its parts.
    pub fn new(status: StatusCode, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Decodes the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}

// ============================================================================
// Transport Error
// ============================================================================

/// A failed exchange, as reported by the transport.
///
/// `Status` carries a response; the other variants mean the request never
/// produced one.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The per-attempt request timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}")]
    Status {
        /// Response status code.
        status: StatusCode,
        /// Response body as parsed JSON (`Null` if unparseable or empty).
        body: serde_json::Value,
    },

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Returns the response parts when a response was received.
    pub fn response(&self) -> Option<(StatusCode, &serde_json::Value)> {
        match self {
            Self::Status { status, body } => Some((*status, body)),
            _ => None,
        }
    }

    /// Returns true for an explicit timeout, or a connection-level failure
    /// whose message indicates one.
    pub fn is_timeout_like(&self) -> bool {
        match self {
            Self::Timeout => true,
            Self::Connect(msg) | Self::Other(msg) => msg.contains("timeout"),
            Self::Status { .. } => false,
        }
    }

    /// Returns true for failures worth retrying: no response at all,
    /// a timeout, or a 5xx status.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout | Self::Connect(_) | Self::Other(_) => true,
            Self::Status { status, .. } => status.is_server_error(),
        }
    }
}

// ============================================================================
// Transport Trait
// ============================================================================

/// One HTTP attempt against the wire.
///
/// Implementations must not retry internally; the pipeline owns the retry
/// policy.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request once and returns the response or the failure.
    async fn send(&self, request: &Request) -> Result<Response, TransportError>;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transient_failures() {
        assert!(TransportError::Timeout.is_transient());
        assert!(TransportError::Connect("refused".into()).is_transient());
        assert!(TransportError::Other("socket closed".into()).is_transient());

        let server = TransportError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: serde_json::Value::Null,
        };
        assert!(server.is_transient());

        let not_found = TransportError::Status {
            status: StatusCode::NOT_FOUND,
            body: serde_json::Value::Null,
        };
        assert!(!not_found.is_transient());
    }

    #[test]
    fn test_timeout_detection_from_message() {
        assert!(TransportError::Timeout.is_timeout_like());
        assert!(TransportError::Connect("handshake timeout".into()).is_timeout_like());
        assert!(!TransportError::Connect("refused".into()).is_timeout_like());
        assert!(!TransportError::Status {
            status: StatusCode::GATEWAY_TIMEOUT,
            body: serde_json::Value::Null,
        }
        .is_timeout_like());
    }

    #[test]
    fn test_response_json_decode() {
        let response = Response::new(StatusCode::OK, json!({ "id": "abc" }));

        #[derive(serde::Deserialize)]
        struct Doc {
            id: String,
        }

        let doc: Doc = response.json().unwrap();
        assert_eq!(doc.id, "abc");

        let bad: Result<Vec<String>, _> = response.json();
        assert!(bad.is_err());
    }
}
