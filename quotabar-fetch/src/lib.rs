// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `QuotaBar` Fetch
//!
//! Host APIs and the quota HTTP client for the `QuotaBar` application.
//!
//! ## Host APIs
//!
//! The [`host`] module provides abstractions for system interactions:
//!
//! - [`host::keychain`] - Platform secret-store lookups by service name
//! - [`host::process`] - Subprocess execution for CLI tools
//!
//! ## Quota Client
//!
//! [`quota::QuotaClient`] exchanges a resolved credential for the
//! Copilot premium-request quota snapshot.

pub mod error;
pub mod host;
pub mod quota;

// Errors
pub use error::{KeychainError, ProcessError, QuotaError};

// Host APIs
pub use host::{
    keychain::{SecretStore, SystemSecretStore},
    process::{ProcessOutput, ProcessRunner},
};

// Quota client
pub use quota::QuotaClient;
