//! The request pipeline.
//!
//! [`ApiClient`] wraps a [`Transport`] and gives every logical call the
//! same treatment: a bearer credential is attached on the way out, failed
//! attempts are retried per policy with exponential backoff, and terminal
//! failures come back as one standardized [`ApiError`]. A logical call
//! resolves exactly once, as a success or as one error, never by panicking
//! or raising.

use std::sync::Arc;

use reqwest::header::{self, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::credentials::{CredentialStore, MemoryCredentialStore};
use crate::error::{ApiError, ErrorKind};
use crate::host::http::ReqwestTransport;
use crate::retry::RetryPolicy;
use crate::transport::{Request, Response, Transport, TransportError};

/// Base URL of the SpaceX REST API, v4.
pub const SPACEX_BASE_URL: &str = "https://api.spacexdata.com/v4";

/// Callback invoked after a terminal `Unauthorized` outcome.
pub type UnauthorizedHook = dyn Fn() + Send + Sync;

// ============================================================================
// Retry State
// ============================================================================

/// Per-call retry bookkeeping.
///
/// Replaced wholesale on each retry rather than mutated in place, so state
/// can never leak across logical calls.
#[derive(Debug, Clone, Copy)]
struct RetryState {
    /// Retries performed so far in this logical call.
    attempts: u32,
}

impl RetryState {
    fn new() -> Self {
        Self { attempts: 0 }
    }

    fn next(self) -> Self {
        Self {
            attempts: self.attempts + 1,
        }
    }
}

// ============================================================================
// Api Client
// ============================================================================

/// HTTP client with auth, retries, and standardized errors.
///
/// All collaborators are injected: the transport, the credential store,
/// and the default retry policy. Calls are independent of each other; the
/// credential store is the only state shared between them.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
    retry: RetryPolicy,
    base_url: Url,
    on_unauthorized: Option<Arc<UnauthorizedHook>>,
}

impl ApiClient {
    /// Creates a builder for customizing the client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Creates a client with default collaborators against the SpaceX API.
    pub fn new() -> Result<Self, TransportError> {
        Self::builder().build()
    }

    /// Returns the credential store, for login/logout flows.
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Performs a GET request and decodes the response body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.execute(Request::get(url)).await?;
        decode(&response)
    }

    /// Performs a POST request with a JSON body and decodes the response.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let body = encode(body)?;
        let response = self.execute(Request::post(url, body)).await?;
        decode(&response)
    }

    /// GET with a per-call retry policy override.
    pub async fn get_with_policy<T: DeserializeOwned>(
        &self,
        path: &str,
        policy: &RetryPolicy,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.execute_with_policy(Request::get(url), policy).await?;
        decode(&response)
    }

    /// Executes a request under the client's default retry policy.
    pub async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let policy = self.retry.clone();
        self.execute_with_policy(request, &policy).await
    }

    /// Executes a request under an explicit retry policy.
    ///
    /// The credential and diagnostic steps run once per logical call;
    /// retries repeat only the transport attempt. The loop is bounded by
    /// `max_retries + 1` iterations, so every call terminates in a
    /// response or exactly one [`ApiError`].
    #[instrument(skip_all, fields(method = %request.method, url = %request.url))]
    pub async fn execute_with_policy(
        &self,
        request: Request,
        policy: &RetryPolicy,
    ) -> Result<Response, ApiError> {
        let request = self.prepare(request);
        let mut state = RetryState::new();

        loop {
            match self.transport.send(&request).await {
                Ok(response) => {
                    debug!(status = %response.status, url = %request.url, "Request succeeded");
                    return Ok(response);
                }
                Err(failure) => {
                    if state.attempts < policy.max_retries && policy.should_retry(&failure) {
                        let delay = policy.delay_for_attempt(state.attempts);
                        state = state.next();
                        warn!(
                            attempt = state.attempts,
                            max_retries = policy.max_retries,
                            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                            error = %failure,
                            "Request failed, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    return Err(self.terminal_failure(&request, failure));
                }
            }
        }
    }

    /// Outgoing hook: attaches the bearer credential and emits the
    /// request diagnostic. Runs once per logical call.
    fn prepare(&self, mut request: Request) -> Request {
        if let Some(token) = self.credentials.get() {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    request.headers.insert(header::AUTHORIZATION, value);
                }
                Err(_) => {
                    // Not header-safe; proceed unauthenticated
                    warn!(url = %request.url, "Stored credential is not a valid header value");
                }
            }
        }

        debug!(
            method = %request.method,
            url = %request.url,
            has_body = request.body.is_some(),
            "Dispatching request"
        );

        request
    }

    /// Builds the terminal standardized error and applies its side
    /// effects: an `Unauthorized` outcome clears the credential store and
    /// invokes the injected hook. `Forbidden` and `NotFound` are recorded
    /// only; any navigation response is the caller's concern.
    fn terminal_failure(&self, request: &Request, failure: TransportError) -> ApiError {
        let api_error = ApiError::from_transport(failure);

        error!(
            kind = %api_error.kind,
            message = %api_error.message,
            status = api_error.status.map(|s| s.as_u16()),
            url = %request.url,
            method = %request.method,
            "Request failed"
        );

        if api_error.kind == ErrorKind::Unauthorized {
            self.credentials.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
        }

        api_error
    }

    /// Resolves a path against the base URL.
    ///
    /// A malformed URL never reaches the transport: it fails the call
    /// immediately, with no retry.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{path}", self.base_url.as_str().trim_end_matches('/'));
        Url::parse(&raw).map_err(|e| {
            ApiError::from_transport(TransportError::Other(format!(
                "invalid request URL {raw}: {e}"
            )))
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

/// Decodes a success body, surfacing decode failures as terminal errors.
fn decode<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    response
        .json()
        .map_err(|e| ApiError::decode(response.status, &e))
}

/// Encodes a request body before the transport is involved.
fn encode(body: &(impl Serialize + ?Sized)) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| {
        ApiError::from_transport(TransportError::Other(format!(
            "failed to encode request body: {e}"
        )))
    })
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing an [`ApiClient`].
pub struct ApiClientBuilder {
    transport: Option<Arc<dyn Transport>>,
    credentials: Option<Arc<dyn CredentialStore>>,
    retry: RetryPolicy,
    base_url: Option<Url>,
    on_unauthorized: Option<Arc<UnauthorizedHook>>,
}

impl ApiClientBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            transport: None,
            credentials: None,
            retry: RetryPolicy::default(),
            base_url: None,
            on_unauthorized: None,
        }
    }

    /// Sets the transport implementation.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets the credential store.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the default retry policy.
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the hook invoked after an `Unauthorized` terminal outcome.
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    /// Builds the client.
    ///
    /// Fails only if the default transport cannot be constructed or the
    /// default base URL fails to parse.
    pub fn build(self) -> Result<ApiClient, TransportError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(SPACEX_BASE_URL)
                .map_err(|e| TransportError::Other(format!("invalid base URL: {e}")))?,
        };

        Ok(ApiClient {
            transport,
            credentials: self
                .credentials
                .unwrap_or_else(|| Arc::new(MemoryCredentialStore::new())),
            retry: self.retry,
            base_url,
            on_unauthorized: self.on_unauthorized,
        })
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
