//! Host and quota error types.

use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Keychain Error
// ============================================================================

/// Error type for secret-store lookups.
#[derive(Debug, Error)]
pub enum KeychainError {
    /// No entry matches the service name exactly.
    #[error("No keychain entry for service: {service}")]
    NotFound {
        /// Service name that was looked up.
        service: String,
    },

    /// The entry exists but its bytes are not valid UTF-8 text.
    #[error("Keychain entry for {service} is not valid UTF-8")]
    InvalidEncoding {
        /// Service name that was looked up.
        service: String,
    },

    /// Platform error (access denied, store unavailable, ...).
    #[error("Keychain error: {0}")]
    Platform(String),
}

// ============================================================================
// Process Error
// ============================================================================

/// Error type for subprocess execution.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Command not found on PATH.
    #[error("Command not found: {0}")]
    NotFound(String),

    /// Command timed out.
    #[error("Command timed out after {0:?}")]
    Timeout(Duration),

    /// IO error while spawning or waiting.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Quota Error
// ============================================================================

/// Error type for the quota HTTP call.
#[derive(Debug, Error)]
pub enum QuotaError {
    /// HTTP transport failure.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The token was rejected.
    #[error("Unauthorized (sign in again)")]
    Unauthorized,

    /// Any other non-200 status.
    #[error("HTTP {0}")]
    UnexpectedStatus(u16),

    /// The response body did not parse.
    #[error("Invalid quota response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
