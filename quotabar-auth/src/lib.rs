// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `QuotaBar` Auth
//!
//! The credential resolution subsystem for the `QuotaBar` application.
//!
//! Resolution walks an ordered chain of token providers and returns the
//! first credential found, or an aggregate error attributing every
//! provider's failure:
//!
//! - [`vscode::VsCodeTokenProvider`] - extracts the GitHub session token
//!   from a VS Code product's encrypted secret store (SQLite state
//!   database, `v10` container, Safe Storage keychain password)
//! - [`gh::GhCliTokenProvider`] - falls back to the `gh auth token`
//!   subprocess
//! - [`chain::TokenProviderChain`] - tries providers strictly in order,
//!   short-circuiting on the first success
//!
//! ## Example
//!
//! ```ignore
//! use quotabar_auth::TokenProviderChain;
//!
//! let chain = TokenProviderChain::default_chain();
//! let credential = chain.resolve().await?;
//! println!("token from {}", credential.source);
//! ```

pub mod chain;
pub mod gh;
pub mod vscode;

// Re-export key types
pub use chain::TokenProviderChain;
pub use gh::GhCliTokenProvider;
pub use vscode::VsCodeTokenProvider;
