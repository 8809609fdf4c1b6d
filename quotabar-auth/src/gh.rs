//! GitHub CLI fallback provider.
//!
//! Runs `gh auth token` and uses the trimmed stdout verbatim as the
//! token. Failure classification is case-insensitive substring matching
//! over a black-box tool's error text, so it is best effort by
//! construction: an upstream wording change degrades the category, not
//! the resolution itself (the raw message still surfaces as a generic
//! failure).

use async_trait::async_trait;
use tracing::{debug, instrument};

use quotabar_core::{AuthError, Credential, TokenProvider};
use quotabar_fetch::{ProcessError, ProcessRunner};

/// The external tool's command name.
const GH_COMMAND: &str = "gh";

/// Token provider backed by the `gh` CLI.
#[derive(Debug, Clone, Default)]
pub struct GhCliTokenProvider {
    runner: ProcessRunner,
}

impl GhCliTokenProvider {
    /// Creates a new gh CLI provider.
    pub fn new() -> Self {
        Self {
            runner: ProcessRunner::new(),
        }
    }
}

#[async_trait]
impl TokenProvider for GhCliTokenProvider {
    fn name(&self) -> &'static str {
        "GitHub CLI (gh)"
    }

    #[instrument(skip(self))]
    async fn fetch_token(&self) -> Result<Credential, AuthError> {
        let output = match self.runner.run(GH_COMMAND, &["auth", "token"]).await {
            Ok(output) => output,
            Err(ProcessError::NotFound(_)) => return Err(AuthError::ToolNotInstalled),
            Err(e) => return Err(classify_failure(&e.to_string())),
        };

        if !output.success() {
            return Err(classify_failure(&output.stderr));
        }

        let token = output.stdout.trim();
        if token.is_empty() {
            return Err(AuthError::ToolCommandFailed(
                "gh returned empty token".to_string(),
            ));
        }

        debug!("Resolved token from gh");
        Ok(Credential::new(token, "gh"))
    }
}

/// Classifies gh's error text into an actionable failure.
fn classify_failure(message: &str) -> AuthError {
    let trimmed = message.trim();
    let lower = trimmed.to_lowercase();

    if lower.contains("no such file") || lower.contains("not found") || lower.contains("env: gh") {
        return AuthError::ToolNotInstalled;
    }

    if lower.contains("gh auth login")
        || lower.contains("not logged")
        || lower.contains("authentication")
        || lower.contains("credentials")
    {
        return AuthError::ToolNotAuthenticated;
    }

    AuthError::ToolCommandFailed(if trimmed.is_empty() {
        "Command failed".to_string()
    } else {
        trimmed.to_string()
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_installed() {
        assert!(matches!(
            classify_failure("env: gh: No such file or directory"),
            AuthError::ToolNotInstalled
        ));
        assert!(matches!(
            classify_failure("zsh: command not found: gh"),
            AuthError::ToolNotInstalled
        ));
    }

    #[test]
    fn test_classify_not_authenticated() {
        assert!(matches!(
            classify_failure(
                "To get started with GitHub CLI, please run:  gh auth login"
            ),
            AuthError::ToolNotAuthenticated
        ));
        assert!(matches!(
            classify_failure("You are not logged into any GitHub hosts."),
            AuthError::ToolNotAuthenticated
        ));
        assert!(matches!(
            classify_failure("error validating CREDENTIALS"),
            AuthError::ToolNotAuthenticated
        ));
    }

    #[test]
    fn test_classify_generic_failure_keeps_message() {
        match classify_failure("  something unexpected broke  ") {
            AuthError::ToolCommandFailed(msg) => {
                assert_eq!(msg, "something unexpected broke");
            }
            other => panic!("expected ToolCommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_empty_failure() {
        match classify_failure("   ") {
            AuthError::ToolCommandFailed(msg) => assert_eq!(msg, "Command failed"),
            other => panic!("expected ToolCommandFailed, got {other:?}"),
        }
    }
}
