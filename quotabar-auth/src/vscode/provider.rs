//! Editor-store provider orchestration.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use quotabar_core::{AuthError, Credential, TokenProvider};
use quotabar_fetch::host::keychain::{SecretStore, SystemSecretStore};
use quotabar_fetch::KeychainError;

use super::products::{self, ProductCandidate};
use super::state_store::StateStore;
use super::{sessions, vault};

/// Capability locator for the GitHub Authentication extension's record.
///
/// Used verbatim as the lookup key; the editor stores it as one opaque
/// string, serialized JSON included.
pub const GITHUB_AUTH_KEY: &str =
    r#"secret://{"extensionId":"vscode.github-authentication","key":"github.auth"}"#;

/// Token provider backed by VS Code's encrypted secret store.
///
/// Probes each candidate product in precedence order. A product without
/// a state database is skipped silently (absence is expected for
/// uninstalled products); a product whose record fails to decode or
/// decrypt is recorded and the next one is tried.
pub struct VsCodeTokenProvider {
    candidates: Vec<ProductCandidate>,
    secrets: Arc<dyn SecretStore>,
}

impl VsCodeTokenProvider {
    /// Creates a provider over the default candidate list and the system
    /// keychain. The product-list env override is read once, here.
    pub fn new() -> Self {
        Self::with_candidates(
            products::default_candidates(),
            Arc::new(SystemSecretStore::new()),
        )
    }

    /// Creates a provider over explicit candidates and secret store.
    pub fn with_candidates(
        candidates: Vec<ProductCandidate>,
        secrets: Arc<dyn SecretStore>,
    ) -> Self {
        Self {
            candidates,
            secrets,
        }
    }

    /// Attempts one candidate end to end.
    ///
    /// `Ok(None)` means this candidate has no usable session (no record,
    /// or every token empty), which is not a failure for the candidate.
    async fn fetch_from_candidate(
        &self,
        candidate: &ProductCandidate,
    ) -> Result<Option<Credential>, AuthError> {
        // Scoped: the database handle is closed before anything else runs.
        let raw = {
            let store = StateStore::open(&candidate.state_db)?;
            store.get(GITHUB_AUTH_KEY)?
        };
        let Some(raw) = raw else {
            debug!(product = %candidate.name, "No GitHub auth record in state database");
            return Ok(None);
        };

        let encrypted = vault::decode_buffer_envelope(&raw)?;
        let container = vault::EncryptedContainer::decode(&encrypted)?;

        let service = candidate.keychain_service();
        let password = match self.secrets.lookup(&service).await {
            Ok(password) => password,
            Err(KeychainError::InvalidEncoding { service }) => {
                return Err(AuthError::InvalidSecretEncoding(service));
            }
            Err(_) => return Err(AuthError::MissingSecret(service)),
        };

        let key = vault::derive_safe_storage_key(&password);
        let plaintext = vault::decrypt(container.ciphertext(), &key)?;
        let records = sessions::parse_sessions(&plaintext)?;

        Ok(sessions::first_access_token(&records)
            .map(|token| Credential::new(token, format!("VS Code ({})", candidate.name))))
    }
}

impl Default for VsCodeTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenProvider for VsCodeTokenProvider {
    fn name(&self) -> &'static str {
        "VS Code"
    }

    #[instrument(skip(self))]
    async fn fetch_token(&self) -> Result<Credential, AuthError> {
        let mut saw_database = false;
        let mut last_error: Option<AuthError> = None;

        for candidate in &self.candidates {
            if !candidate.state_db.exists() {
                continue;
            }
            saw_database = true;

            match self.fetch_from_candidate(candidate).await {
                Ok(Some(credential)) => {
                    debug!(product = %candidate.name, "Resolved token from secret store");
                    return Ok(credential);
                }
                Ok(None) => {}
                Err(e) => {
                    // One failing product profile must not abort the rest.
                    warn!(product = %candidate.name, error = %e, "Candidate failed");
                    last_error = Some(e);
                }
            }
        }

        // A concrete decode/derive/decrypt error is more actionable than
        // the generic classification.
        if let Some(err) = last_error {
            return Err(err);
        }

        Err(if saw_database {
            AuthError::NotSignedIn
        } else {
            AuthError::NotInstalled
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    /// Secret store answering a fixed password for every service.
    struct FixedSecretStore(String);

    #[async_trait]
    impl SecretStore for FixedSecretStore {
        async fn lookup(&self, _service: &str) -> Result<String, KeychainError> {
            Ok(self.0.clone())
        }
    }

    /// Secret store with no entries at all.
    struct EmptySecretStore;

    #[async_trait]
    impl SecretStore for EmptySecretStore {
        async fn lookup(&self, service: &str) -> Result<String, KeychainError> {
            Err(KeychainError::NotFound {
                service: service.to_string(),
            })
        }
    }

    fn state_db_with(dir: &tempfile::TempDir, rows: &[(&str, &str)]) -> std::path::PathBuf {
        let path = dir.path().join("state.vscdb");
        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "CREATE TABLE ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB)",
            [],
        )
        .unwrap();
        for (key, value) in rows {
            conn.execute(
                "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)",
                [key, value],
            )
            .unwrap();
        }
        path
    }

    #[tokio::test]
    async fn test_no_database_anywhere_is_not_installed() {
        let provider = VsCodeTokenProvider::with_candidates(
            vec![
                ProductCandidate::new("Code", "/nonexistent/a/state.vscdb"),
                ProductCandidate::new("VSCodium", "/nonexistent/b/state.vscdb"),
            ],
            Arc::new(EmptySecretStore),
        );

        let err = provider.fetch_token().await.unwrap_err();
        assert!(matches!(err, AuthError::NotInstalled));
    }

    #[tokio::test]
    async fn test_database_without_record_is_not_signed_in() {
        let dir = tempfile::tempdir().unwrap();
        let path = state_db_with(&dir, &[("unrelated", "value")]);

        let provider = VsCodeTokenProvider::with_candidates(
            vec![ProductCandidate::new("Code", path)],
            Arc::new(EmptySecretStore),
        );

        let err = provider.fetch_token().await.unwrap_err();
        assert!(matches!(err, AuthError::NotSignedIn));
    }

    #[tokio::test]
    async fn test_bad_container_surfaces_specific_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = state_db_with(&dir, &[(GITHUB_AUTH_KEY, r#"{"note":"not a buffer"}"#)]);

        let provider = VsCodeTokenProvider::with_candidates(
            vec![ProductCandidate::new("Code", path)],
            Arc::new(FixedSecretStore("pw".to_string())),
        );

        let err = provider.fetch_token().await.unwrap_err();
        assert!(matches!(err, AuthError::UnsupportedFormat));
    }

    #[tokio::test]
    async fn test_missing_keychain_entry_surfaces_service_name() {
        // A well-formed v10 record forces the provider as far as the
        // keychain lookup.
        let encrypted: Vec<u8> = b"v10".iter().copied().chain([0u8; 16]).collect();
        let envelope = serde_json::json!({ "type": "Buffer", "data": encrypted }).to_string();

        let dir = tempfile::tempdir().unwrap();
        let path = state_db_with(&dir, &[(GITHUB_AUTH_KEY, envelope.as_str())]);

        let provider = VsCodeTokenProvider::with_candidates(
            vec![ProductCandidate::new("Code - Insiders", path)],
            Arc::new(EmptySecretStore),
        );

        let err = provider.fetch_token().await.unwrap_err();
        match err {
            AuthError::MissingSecret(service) => {
                assert_eq!(service, "Code - Insiders Safe Storage");
            }
            other => panic!("expected MissingSecret, got {other:?}"),
        }
    }
}
