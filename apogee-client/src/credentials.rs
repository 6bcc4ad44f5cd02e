//! Credential storage.
//!
//! The pipeline reads a single bearer token slot through the
//! [`CredentialStore`] trait. The store is injected at client construction
//! so tests can substitute an in-memory fake; a system-keychain
//! implementation lives in [`crate::host::keyring`].
//!
//! A missing credential is never an error: requests simply go out
//! unauthenticated. Concurrent readers may observe a momentarily stale
//! value around a clear; that is benign for a read-idempotent slot.

use std::sync::Mutex;

/// A single process-wide credential slot.
pub trait CredentialStore: Send + Sync {
    /// Returns the current token, if one is stored.
    fn get(&self) -> Option<String>;

    /// Stores a new token, replacing any existing one.
    fn set(&self, token: &str);

    /// Removes the stored token.
    fn clear(&self);
}

/// In-memory credential store.
///
/// The default store for tests and for applications that manage tokens
/// per process rather than persistently.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned slot still holds a usable Option
        self.token.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.slot().clone()
    }

    fn set(&self, token: &str) {
        *self.slot() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot() = None;
    }
}

// ============================================================================
// Tests
// ============================================================================
