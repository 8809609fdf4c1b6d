//! Credential-resolution error taxonomy for `QuotaBar`.

use thiserror::Error;

/// One provider's failure inside an aggregate resolution error.
///
/// Collected in provider priority order so callers can render per-source
/// guidance (e.g. "VS Code: not signed in" vs "gh: not installed").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFailure {
    /// Human-readable provider label (e.g. "VS Code").
    pub provider: String,
    /// The provider's failure message.
    pub message: String,
}

impl ProviderFailure {
    /// Creates a new provider failure record.
    pub fn new(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while resolving a Copilot credential.
///
/// Per-candidate and per-provider errors are caught and folded into
/// [`AuthError::AllProvidersFailed`] by the chain; a failed resolution is a
/// normal user-visible state (not signed in yet), never fatal to the host.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The secret database could not be opened or queried.
    #[error("{0}")]
    StoreUnavailable(String),

    /// The stored secret is not in the recognized container format.
    #[error("Unsupported VS Code secret format")]
    UnsupportedFormat,

    /// No keychain entry matches the Safe Storage service name.
    #[error("Missing keychain item: {0}")]
    MissingSecret(String),

    /// The keychain entry exists but is not valid UTF-8 text.
    #[error("Invalid keychain data: {0}")]
    InvalidSecretEncoding(String),

    /// The cipher operation failed (wrong key length, corrupt padding).
    #[error("Secret decrypt failed")]
    DecryptFailed,

    /// Decrypted plaintext is not a well-formed session array.
    #[error("Malformed auth session data: {0}")]
    MalformedSession(String),

    /// No candidate product had a secret database on disk.
    #[error("VS Code auth data not found")]
    NotInstalled,

    /// A database existed but no candidate yielded a token.
    #[error("Not signed in via VS Code")]
    NotSignedIn,

    /// The external CLI tool is not installed.
    #[error("GitHub CLI (gh) not installed")]
    ToolNotInstalled,

    /// The external CLI tool is installed but not authenticated.
    #[error("GitHub CLI not authenticated (run: gh auth login)")]
    ToolNotAuthenticated,

    /// The external CLI tool failed for another reason.
    #[error("{0}")]
    ToolCommandFailed(String),

    /// The chain was invoked with an empty provider list.
    #[error("No auth providers configured")]
    NoProvidersConfigured,

    /// Every provider in the chain failed.
    ///
    /// Carries the ordered per-provider failures for attribution.
    #[error("No GitHub auth token found")]
    AllProvidersFailed(Vec<ProviderFailure>),
}

impl AuthError {
    /// Returns the per-provider failures if this is an aggregate error.
    pub fn failures(&self) -> Option<&[ProviderFailure]> {
        match self {
            Self::AllProvidersFailed(failures) => Some(failures),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_preserves_order() {
        let err = AuthError::AllProvidersFailed(vec![
            ProviderFailure::new("VS Code", "A"),
            ProviderFailure::new("GitHub CLI (gh)", "B"),
        ]);

        let failures = err.failures().unwrap();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].message, "A");
        assert_eq!(failures[1].message, "B");
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            AuthError::NotInstalled.to_string(),
            "VS Code auth data not found"
        );
        assert_eq!(
            AuthError::NotSignedIn.to_string(),
            "Not signed in via VS Code"
        );
        assert_eq!(
            AuthError::ToolNotAuthenticated.to_string(),
            "GitHub CLI not authenticated (run: gh auth login)"
        );
        assert_eq!(
            AuthError::MissingSecret("Code Safe Storage".to_string()).to_string(),
            "Missing keychain item: Code Safe Storage"
        );
    }

    #[test]
    fn test_failures_on_non_aggregate() {
        assert!(AuthError::NotSignedIn.failures().is_none());
    }
}
