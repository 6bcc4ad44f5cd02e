//! Service-level error reporting.

use apogee_client::{ApiError, ErrorKind};
use thiserror::Error;
use tracing::error;

/// A failed service operation.
///
/// Wraps the pipeline's [`ApiError`] with the service, operation, and
/// endpoint that failed, so callers can render `message` directly and
/// still know where the failure came from.
#[derive(Debug, Error)]
#[error("{service}: failed to {operation} ({endpoint}): {source}")]
pub struct ServiceError {
    /// Service name (e.g. "RocketService").
    pub service: &'static str,
    /// Description of the failed operation (e.g. "fetch all rockets").
    pub operation: String,
    /// Endpoint the operation targeted.
    pub endpoint: String,
    /// The standardized pipeline error.
    #[source]
    pub source: ApiError,
}

impl ServiceError {
    /// Logs a failed operation in a consistent format and wraps it.
    pub fn report(
        service: &'static str,
        operation: impl Into<String>,
        endpoint: impl Into<String>,
        source: ApiError,
    ) -> Self {
        let operation = operation.into();
        let endpoint = endpoint.into();

        error!(
            service,
            operation = %operation,
            endpoint = %endpoint,
            kind = %source.kind,
            status = source.status.map(|s| s.as_u16()),
            error = %source.message,
            "Service call failed"
        );

        Self {
            service,
            operation,
            endpoint,
            source,
        }
    }

    /// Returns the display-ready message from the underlying error.
    pub fn message(&self) -> &str {
        &self.source.message
    }

    /// Returns the failure category of the underlying error.
    pub fn kind(&self) -> ErrorKind {
        self.source.kind
    }
}
