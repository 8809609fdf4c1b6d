//! Copilot premium-request quota client.
//!
//! Exchanges a resolved credential for the current premium-interactions
//! quota snapshot. The `copilot_internal` endpoint is the one the GitHub
//! dashboard itself consumes; every field is treated as optional.

use chrono::Utc;
use quotabar_core::{meta, Credential, PremiumQuota};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::QuotaError;

/// GitHub API base URL.
const GITHUB_API_BASE: &str = "https://api.github.com";

/// Endpoint path for the Copilot user snapshot.
const COPILOT_USER_PATH: &str = "/copilot_internal/user";

/// Pinned API version header value.
const GITHUB_API_VERSION: &str = "2025-05-01";

/// Request timeout.
const REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Wire Format
// ============================================================================

/// Response body of `GET /copilot_internal/user` (fields we consume).
#[derive(Debug, Deserialize)]
struct CopilotInternalUser {
    #[serde(default)]
    login: Option<String>,
    #[serde(default)]
    quota_snapshots: Option<QuotaSnapshots>,
}

#[derive(Debug, Deserialize)]
struct QuotaSnapshots {
    #[serde(default)]
    premium_interactions: Option<QuotaSnapshot>,
}

#[derive(Debug, Deserialize)]
struct QuotaSnapshot {
    #[serde(default)]
    entitlement: Option<i64>,
    #[serde(default)]
    remaining: Option<i64>,
    #[serde(default)]
    unlimited: Option<bool>,
}

// ============================================================================
// Quota Client
// ============================================================================

/// HTTP client for the Copilot quota endpoint.
#[derive(Debug, Clone)]
pub struct QuotaClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuotaClient {
    /// Creates a client against the public GitHub API.
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Creates a client against an explicit base URL (for tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetches the premium-interactions quota for the given credential.
    #[instrument(skip(self, credential), fields(source = %credential.source))]
    pub async fn fetch_premium_quota(
        &self,
        credential: &Credential,
    ) -> Result<PremiumQuota, QuotaError> {
        let url = format!("{}{}", self.base_url, COPILOT_USER_PATH);
        debug!(url = %url, "Fetching premium quota");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", credential.token))
            .header(reqwest::header::ACCEPT, "application/json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(reqwest::header::USER_AGENT, meta::user_agent())
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(QuotaError::Unauthorized);
        }
        if !status.is_success() {
            return Err(QuotaError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        parse_user_response(&body)
    }
}

impl Default for QuotaClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the user response body into a quota snapshot.
fn parse_user_response(body: &str) -> Result<PremiumQuota, QuotaError> {
    let user: CopilotInternalUser = serde_json::from_str(body)?;

    let premium = user
        .quota_snapshots
        .and_then(|snapshots| snapshots.premium_interactions);

    Ok(PremiumQuota {
        login: user.login.unwrap_or_else(|| "—".to_string()),
        entitlement: premium.as_ref().and_then(|p| p.entitlement),
        remaining: premium.as_ref().and_then(|p| p.remaining),
        unlimited: premium.as_ref().and_then(|p| p.unlimited).unwrap_or(false),
        fetched_at: Utc::now(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "login": "octocat",
            "copilot_plan": "individual",
            "quota_snapshots": {
                "premium_interactions": {
                    "entitlement": 300,
                    "remaining": 142,
                    "unlimited": false,
                    "overage_permitted": true
                }
            }
        }"#;

        let quota = parse_user_response(body).unwrap();
        assert_eq!(quota.login, "octocat");
        assert_eq!(quota.entitlement, Some(300));
        assert_eq!(quota.remaining, Some(142));
        assert!(!quota.unlimited);
    }

    #[test]
    fn test_parse_unlimited_account() {
        let body = r#"{
            "login": "octocat",
            "quota_snapshots": {
                "premium_interactions": { "unlimited": true }
            }
        }"#;

        let quota = parse_user_response(body).unwrap();
        assert!(quota.unlimited);
        assert_eq!(quota.entitlement, None);
        assert_eq!(quota.remaining, None);
    }

    #[test]
    fn test_parse_missing_snapshots() {
        let quota = parse_user_response(r#"{"login":"octocat"}"#).unwrap();
        assert_eq!(quota.login, "octocat");
        assert_eq!(quota.remaining, None);
        assert!(!quota.unlimited);
    }

    #[test]
    fn test_parse_empty_object() {
        let quota = parse_user_response("{}").unwrap();
        assert_eq!(quota.login, "—");
    }

    #[test]
    fn test_parse_invalid_body() {
        assert!(matches!(
            parse_user_response("not json"),
            Err(QuotaError::InvalidResponse(_))
        ));
    }
}
