//! Resolved credential model.

use serde::Serialize;

/// A resolved GitHub bearer token plus its origin label.
///
/// Immutable once constructed; consumed by the quota client and never
/// persisted to disk. The `source` is advisory/diagnostic only (e.g.
/// `"VS Code (Code)"` or `"gh"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    /// The OAuth access token (non-empty).
    pub token: String,
    /// Human-readable origin label.
    pub source: String,
}

impl Credential {
    /// Creates a new credential.
    pub fn new(token: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            source: source.into(),
        }
    }
}
