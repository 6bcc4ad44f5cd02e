// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Apogee Services
//!
//! Typed resource services for the SpaceX REST API.
//!
//! Each service wraps a shared [`apogee_client::ApiClient`] and exposes the
//! operations for one resource. Every operation resolves to the parsed
//! payload or a [`ServiceError`] carrying the failing endpoint and a
//! display-ready message; nothing here panics or throws.
//!
//! - [`RocketService`] - `/rockets`
//! - [`LaunchService`] - `/launches`
//! - [`HistoryService`] - `/history`
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use apogee_client::ApiClient;
//! use apogee_services::RocketService;
//!
//! let client = Arc::new(ApiClient::new()?);
//! let rockets = RocketService::new(client);
//! match rockets.all().await {
//!     Ok(list) => render(list),
//!     Err(e) => show_error(e.message()),
//! }
//! ```

pub mod error;
pub mod history;
pub mod launches;
pub mod rockets;

pub use error::ServiceError;
pub use history::HistoryService;
pub use launches::LaunchService;
pub use rockets::RocketService;

// ============================================================================
// Test Support
// ============================================================================
