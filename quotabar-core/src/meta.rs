//! Application identity and environment overrides.
//!
//! Defaults can be overridden through the environment so packaged builds
//! (or tests) can rebrand without recompiling.

/// Display name shown in CLI headers.
pub const DISPLAY_NAME: &str = "Copilot Quota";

/// Environment override for the HTTP user agent.
pub const USER_AGENT_ENV: &str = "QUOTABAR_USER_AGENT";

/// User agent sent with quota requests.
///
/// Defaults to `quotabar/<version>` unless overridden via
/// [`USER_AGENT_ENV`].
pub fn user_agent() -> String {
    env_value(USER_AGENT_ENV)
        .unwrap_or_else(|| format!("quotabar/{}", env!("CARGO_PKG_VERSION")))
}

/// Reads an environment variable, treating blank values as unset.
fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_is_never_blank() {
        // We don't modify env vars in tests to avoid unsafe blocks and
        // test isolation issues; unset or blank overrides fall back to
        // the versioned default either way.
        assert!(!user_agent().is_empty());
    }
}
