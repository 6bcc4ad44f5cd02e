//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::transport::{Request, Response, Transport, TransportError};

/// Default per-attempt request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User agent string for apogee.
const USER_AGENT: &str = concat!("apogee/", env!("CARGO_PKG_VERSION"));

/// HTTP transport backed by a shared reqwest client.
///
/// Each call is a single attempt with a fixed timeout ceiling; retry
/// decisions belong to the pipeline.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the default timeout.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a transport with a custom per-attempt timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { inner: client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &Request) -> Result<Response, TransportError> {
        let mut builder = self
            .inner
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        debug!(status = %status, url = %request.url, "HTTP exchange completed");

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        if status.is_success() {
            let body = if bytes.is_empty() {
                serde_json::Value::Null
            } else {
                serde_json::from_slice(&bytes).map_err(|e| {
                    TransportError::Other(format!("invalid JSON in response body: {e}"))
                })?
            };
            return Ok(Response::new(status, body));
        }

        // Error bodies are best-effort JSON; an unparseable body still
        // classifies by status
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        Err(TransportError::Status { status, body })
    }
}

/// Maps a reqwest failure onto the transport taxonomy.
fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else {
        TransportError::Other(error.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new();
        assert!(transport.is_ok());

        let transport = ReqwestTransport::with_timeout(Duration::from_secs(5));
        assert!(transport.is_ok());
    }
}
