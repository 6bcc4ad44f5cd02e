// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Apogee Client
//!
//! The HTTP request pipeline for apogee: authentication, retries with
//! exponential backoff, and standardized errors.
//!
//! Every request goes through the same pipeline:
//!
//! 1. The outgoing hook attaches a bearer credential (when one is stored)
//!    and emits a request diagnostic.
//! 2. The transport makes one attempt; transient failures (no response,
//!    timeouts, 5xx) are retried per [`RetryPolicy`] with capped
//!    exponential backoff.
//! 3. A terminal failure is classified into one of nine [`ErrorKind`]s
//!    and returned as a single [`ApiError`] carrying a display-ready
//!    message; a 401 additionally clears the credential store.
//!
//! ## Boundaries
//!
//! - [`Transport`] - one HTTP attempt; [`host::http::ReqwestTransport`]
//!   is the default implementation
//! - [`CredentialStore`] - the bearer token slot; in-memory and
//!   system-keychain implementations provided
//! - Diagnostics go through `tracing` and never affect call outcomes
//!
//! ## Example
//!
//! ```ignore
//! use apogee_client::ApiClient;
//!
//! let client = ApiClient::new()?;
//! let rockets: Vec<Rocket> = client.get("/rockets").await?;
//! ```

// Core modules
pub mod credentials;
pub mod error;
pub mod host;
pub mod pipeline;
pub mod retry;
pub mod transport;

// Re-export key types at crate root

// Status codes appear in the public error type; re-export so consumers
// need not depend on the transport crate directly
pub use reqwest::StatusCode;

// Errors
pub use error::{ApiError, ErrorKind};

// Boundaries
pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use host::{http::ReqwestTransport, keyring::KeyringCredentialStore};
pub use transport::{Request, Response, Transport, TransportError};

// Pipeline
pub use pipeline::{ApiClient, ApiClientBuilder, SPACEX_BASE_URL};
pub use retry::RetryPolicy;
