//! VS Code editor-store token provider.
//!
//! VS Code's GitHub Authentication extension stores its OAuth sessions
//! encrypted inside the product's per-user state database. Resolving a
//! token means walking that storage end to end:
//!
//! 1. [`products`] - which product installs to probe, in what order
//! 2. [`state_store`] - read-only key lookup in `state.vscdb`
//! 3. [`vault`] - Buffer envelope, `v10` container, PBKDF2 + AES-CBC
//! 4. [`sessions`] - decode the session array, pick the first token
//! 5. [`provider`] - orchestration across candidates
//!
//! The Safe Storage password itself comes from the platform keychain via
//! `quotabar_fetch::host::keychain`.

pub mod products;
pub mod provider;
pub mod sessions;
pub mod state_store;
pub mod vault;

// Re-exports
pub use products::{ProductCandidate, PRODUCTS_ENV};
pub use provider::{VsCodeTokenProvider, GITHUB_AUTH_KEY};
pub use state_store::StateStore;
pub use vault::EncryptedContainer;
