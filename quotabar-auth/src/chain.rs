//! Ordered provider chain.

use tracing::{debug, instrument};

use quotabar_core::{AuthError, Credential, ProviderFailure, TokenProvider};

use crate::gh::GhCliTokenProvider;
use crate::vscode::VsCodeTokenProvider;

/// Tries token providers strictly in order until one succeeds.
///
/// Each provider is tried exactly once per [`resolve`](Self::resolve)
/// call; retry and backoff belong to the caller (e.g. a periodic
/// refresh), not to the chain. Failures are collected in order so the
/// aggregate error can attribute each source.
pub struct TokenProviderChain {
    providers: Vec<Box<dyn TokenProvider>>,
}

impl TokenProviderChain {
    /// Creates a chain over an explicit provider list.
    pub fn new(providers: Vec<Box<dyn TokenProvider>>) -> Self {
        Self { providers }
    }

    /// The default chain: VS Code secret store first, gh CLI fallback.
    pub fn default_chain() -> Self {
        Self::new(vec![
            Box::new(VsCodeTokenProvider::new()),
            Box::new(GhCliTokenProvider::new()),
        ])
    }

    /// Resolves a credential from the first provider that succeeds.
    ///
    /// Providers run strictly sequentially; later providers are never
    /// invoked once one succeeds. If every provider fails, the aggregate
    /// error carries the ordered per-provider failures.
    #[instrument(skip(self), fields(providers = self.providers.len()))]
    pub async fn resolve(&self) -> Result<Credential, AuthError> {
        if self.providers.is_empty() {
            return Err(AuthError::NoProvidersConfigured);
        }

        let mut failures = Vec::new();

        for provider in &self.providers {
            match provider.fetch_token().await {
                Ok(credential) => {
                    debug!(provider = provider.name(), source = %credential.source, "Credential resolved");
                    return Ok(credential);
                }
                Err(e) => {
                    debug!(provider = provider.name(), error = %e, "Provider failed");
                    failures.push(ProviderFailure::new(provider.name(), e.to_string()));
                }
            }
        }

        Err(AuthError::AllProvidersFailed(failures))
    }
}

// ============================================================================
// Tests
// ============================================================================
