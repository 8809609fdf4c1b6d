//! Trait definitions for `QuotaBar`.
//!
//! This module defines the capability that concrete token providers
//! implement and the chain resolves over.

use async_trait::async_trait;

use crate::error::AuthError;
use crate::models::Credential;

/// A capability that produces a GitHub auth token.
///
/// Implementors of this trait are responsible for:
/// - Locating their credential source (editor secret store, CLI tool)
/// - Extracting and, where needed, decrypting the stored token
/// - Classifying their own failures into [`AuthError`] variants
///
/// Providers are tried strictly sequentially by the chain; a single
/// `fetch_token` call must be self-contained and leave no state behind.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Human-readable label for this provider, used for failure attribution.
    fn name(&self) -> &'static str;

    /// Attempts to resolve a credential from this provider's source.
    async fn fetch_token(&self) -> Result<Credential, AuthError>;
}
