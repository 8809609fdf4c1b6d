//! Platform secret-store lookups.
//!
//! This module gives the resolution core read access to the system's
//! protected credential store:
//! - macOS: Keychain Services
//! - Linux: Secret Service (GNOME Keyring, KDE Wallet)
//! - Windows: Credential Manager
//!
//! Lookups match the service name exactly (no prefixing, no fuzzy
//! matching) because the service names consumed here, e.g.
//! `"Code Safe Storage"`, are fixed by the applications that created
//! the entries.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::error::KeychainError;

// ============================================================================
// Secret Store Trait
// ============================================================================

/// Read-only access to the platform secret store.
///
/// The account component is always empty: Safe Storage entries are keyed
/// by service name alone.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Look up the stored secret for an exact service name.
    ///
    /// Returns the secret interpreted as UTF-8 text, trimmed of
    /// surrounding whitespace.
    async fn lookup(&self, service: &str) -> Result<String, KeychainError>;
}

// ============================================================================
// System Implementation
// ============================================================================

/// Default implementation backed by the system keychain.
#[derive(Debug, Clone, Default)]
pub struct SystemSecretStore;

impl SystemSecretStore {
    /// Creates a new system secret store.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecretStore for SystemSecretStore {
    async fn lookup(&self, service: &str) -> Result<String, KeychainError> {
        debug!(service = %service, "Looking up secret-store entry");

        let entry = Entry::new(service, "").map_err(|e| {
            warn!(service = %service, error = %e, "Failed to create keychain entry");
            KeychainError::Platform(e.to_string())
        })?;

        match entry.get_password() {
            Ok(secret) => {
                debug!(service = %service, "Secret-store entry found");
                Ok(secret.trim().to_string())
            }
            Err(keyring::Error::NoEntry) => {
                debug!(service = %service, "No secret-store entry");
                Err(KeychainError::NotFound {
                    service: service.to_string(),
                })
            }
            Err(keyring::Error::BadEncoding(_)) => {
                warn!(service = %service, "Secret-store entry is not UTF-8");
                Err(KeychainError::InvalidEncoding {
                    service: service.to_string(),
                })
            }
            Err(e) => {
                warn!(service = %service, error = %e, "Secret-store lookup failed");
                Err(KeychainError::Platform(e.to_string()))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let not_found = KeychainError::NotFound {
            service: "Code Safe Storage".to_string(),
        };
        assert_eq!(
            not_found.to_string(),
            "No keychain entry for service: Code Safe Storage"
        );

        let bad_encoding = KeychainError::InvalidEncoding {
            service: "Code Safe Storage".to_string(),
        };
        assert!(bad_encoding.to_string().contains("not valid UTF-8"));
    }

    // Note: Actual keychain round-trips require platform access and are
    // exercised manually, not in unit tests.
}
