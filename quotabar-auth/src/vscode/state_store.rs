//! Read-only key-value lookups in a VS Code state database.

use std::path::Path;

use rusqlite::{Connection, OpenFlags, OptionalExtension};
use tracing::debug;

use quotabar_core::AuthError;

/// Read-only handle on a product's `state.vscdb`.
///
/// Opened strictly read-only: the store belongs to the editor and must
/// never be created or migrated from here. The connection is scoped:
/// callers open, look up one key, and drop the handle before doing
/// anything else.
#[derive(Debug)]
pub struct StateStore {
    conn: Connection,
}

impl StateStore {
    /// Opens the database at `path` read-only.
    ///
    /// Fails with [`AuthError::StoreUnavailable`] if the file cannot be
    /// opened for reading (including when it does not exist).
    pub fn open(path: &Path) -> Result<Self, AuthError> {
        debug!(path = %path.display(), "Opening state database read-only");

        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| {
                AuthError::StoreUnavailable(format!("Failed to open VS Code database: {e}"))
            })?;

        Ok(Self { conn })
    }

    /// Looks up a single value by exact key match.
    ///
    /// The key is bound as a parameter and used verbatim; keys here are
    /// long serialized capability locators, not patterns. A missing key
    /// is `Ok(None)`, never an error.
    pub fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        self.conn
            .query_row(
                "SELECT value FROM ItemTable WHERE key = ?1 LIMIT 1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| {
                AuthError::StoreUnavailable(format!("Failed to query VS Code database: {e}"))
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
