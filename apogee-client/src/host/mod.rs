//! Default host implementations of the pipeline's boundaries.
//!
//! - [`http`] - reqwest-backed [`crate::transport::Transport`]
//! - [`keyring`] - system-keychain [`crate::credentials::CredentialStore`]

pub mod http;
pub mod keyring;
