//! Product candidates and their state-database paths.

use std::path::PathBuf;

/// Environment override for the candidate product list (comma-separated).
pub const PRODUCTS_ENV: &str = "QUOTABAR_VSCODE_PRODUCTS";

/// Default product names, in precedence order.
const DEFAULT_PRODUCTS: [&str; 3] = ["Code - Insiders", "Code", "VSCodium"];

/// Relative path of the state database inside a product's data directory.
const STATE_DB_RELATIVE: &str = "User/globalStorage/state.vscdb";

// ============================================================================
// Product Candidate
// ============================================================================

/// One product installation whose secret database may or may not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCandidate {
    /// Product name (e.g. "Code", "VSCodium").
    pub name: String,
    /// Path to the product's `state.vscdb`.
    pub state_db: PathBuf,
}

impl ProductCandidate {
    /// Creates a candidate with an explicit database path.
    pub fn new(name: impl Into<String>, state_db: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            state_db: state_db.into(),
        }
    }

    /// Creates a candidate for a product under the per-user data directory.
    pub fn for_product(name: &str) -> Option<Self> {
        Some(Self {
            name: name.to_string(),
            state_db: product_data_dir(name)?.join(STATE_DB_RELATIVE),
        })
    }

    /// Keychain service holding this product's Safe Storage password.
    ///
    /// Exact string match; the suffix is fixed by the product itself.
    pub fn keychain_service(&self) -> String {
        format!("{} Safe Storage", self.name)
    }
}

/// Per-user data directory for a VS Code product on macOS.
#[cfg(target_os = "macos")]
fn product_data_dir(product: &str) -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join("Library/Application Support").join(product))
}

/// Per-user data directory for a VS Code product on Linux.
#[cfg(target_os = "linux")]
fn product_data_dir(product: &str) -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join(product))
}

/// Per-user data directory for a VS Code product on Windows.
#[cfg(target_os = "windows")]
fn product_data_dir(product: &str) -> Option<PathBuf> {
    Some(dirs::data_dir()?.join(product))
}

// ============================================================================
// Candidate List
// ============================================================================

/// Candidate list in precedence order, honoring the env override.
///
/// The environment is read once here, at provider construction; the
/// resulting list is immutable afterwards.
pub fn default_candidates() -> Vec<ProductCandidate> {
    let raw = std::env::var(PRODUCTS_ENV).ok();
    parse_product_names(raw.as_deref())
        .iter()
        .filter_map(|name| ProductCandidate::for_product(name))
        .collect()
}

/// Parses the override value, falling back to the default product list.
///
/// Entries are trimmed and empty entries filtered; a value that yields
/// nothing behaves as if it were unset.
pub(crate) fn parse_product_names(raw: Option<&str>) -> Vec<String> {
    if let Some(raw) = raw {
        let parsed: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .collect();
        if !parsed.is_empty() {
            return parsed;
        }
    }

    DEFAULT_PRODUCTS.iter().map(ToString::to_string).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_product_names() {
        assert_eq!(
            parse_product_names(None),
            vec!["Code - Insiders", "Code", "VSCodium"]
        );
    }

    #[test]
    fn test_override_parsing() {
        assert_eq!(
            parse_product_names(Some("Code, Cursor")),
            vec!["Code", "Cursor"]
        );
    }

    #[test]
    fn test_override_filters_empty_entries() {
        assert_eq!(
            parse_product_names(Some(" , Code ,, ")),
            vec!["Code"]
        );
    }

    #[test]
    fn test_blank_override_falls_back_to_defaults() {
        assert_eq!(parse_product_names(Some("  ")), parse_product_names(None));
        assert_eq!(parse_product_names(Some(",,")), parse_product_names(None));
    }

    #[test]
    fn test_keychain_service_name() {
        let candidate = ProductCandidate::new("Code - Insiders", "/tmp/state.vscdb");
        assert_eq!(candidate.keychain_service(), "Code - Insiders Safe Storage");
    }

    #[test]
    fn test_for_product_path_shape() {
        let candidate = ProductCandidate::for_product("Code").unwrap();
        assert!(candidate.state_db.ends_with("User/globalStorage/state.vscdb"));
        assert!(candidate
            .state_db
            .components()
            .any(|c| c.as_os_str() == "Code"));
    }
}
