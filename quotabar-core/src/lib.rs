// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `QuotaBar` Core
//!
//! Core types, models, and traits for the `QuotaBar` application.
//!
//! This crate provides the foundational abstractions used across all other
//! `QuotaBar` crates, including:
//!
//! - Domain models (credentials, quota snapshots)
//! - The credential-resolution error taxonomy
//! - The [`TokenProvider`] trait that concrete providers implement
//! - Application metadata (display name, user agent, env overrides)
//!
//! ## Key Types
//!
//! - [`Credential`] - A resolved bearer token plus its origin label
//! - [`PremiumQuota`] - The Copilot premium-request quota snapshot
//! - [`AuthError`] - Everything that can go wrong while resolving a token
//! - [`ProviderFailure`] - Per-provider attribution inside an aggregate failure
//! - [`TokenProvider`] - Capability producing a [`Credential`] or failing with a reason

pub mod error;
pub mod meta;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::{AuthError, ProviderFailure};

// Re-export model types
pub use models::{Credential, PremiumQuota};

// Re-export traits
pub use traits::TokenProvider;
