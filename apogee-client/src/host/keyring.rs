//! System-keychain credential store.
//!
//! Persists the bearer token in the platform keychain:
//! - macOS: Keychain Services
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring, KDE Wallet)
//!
//! Keychain failures degrade to "no credential" with a warning rather than
//! failing the request; the pipeline treats an absent token as an
//! unauthenticated call.

use keyring::Entry;
use tracing::{debug, warn};

use crate::credentials::CredentialStore;

/// Service name prefix for apogee credentials.
const SERVICE_PREFIX: &str = "apogee";

/// Credential store backed by the system keychain.
#[derive(Debug, Clone)]
pub struct KeyringCredentialStore {
    service: String,
    account: String,
}

impl KeyringCredentialStore {
    /// Creates a store for the given service and account names.
    pub fn new(service: &str, account: &str) -> Self {
        Self {
            service: format!("{SERVICE_PREFIX}:{service}"),
            account: account.to_string(),
        }
    }

    fn entry(&self) -> Option<Entry> {
        match Entry::new(&self.service, &self.account) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(service = %self.service, error = %e, "Failed to open keychain entry");
                None
            }
        }
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn get(&self) -> Option<String> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(token) if !token.is_empty() => Some(token),
            Ok(_) | Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!(service = %self.service, error = %e, "Failed to read credential");
                None
            }
        }
    }

    fn set(&self, token: &str) {
        let Some(entry) = self.entry() else { return };
        match entry.set_password(token) {
            Ok(()) => debug!(service = %self.service, "Credential stored"),
            Err(e) => warn!(service = %self.service, error = %e, "Failed to store credential"),
        }
    }

    fn clear(&self) {
        let Some(entry) = self.entry() else { return };
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {
                debug!(service = %self.service, "Credential cleared");
            }
            Err(e) => warn!(service = %self.service, error = %e, "Failed to clear credential"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
