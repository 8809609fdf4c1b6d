//! Premium-request quota snapshot model.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A snapshot of the Copilot premium-interactions quota for one user.
///
/// `entitlement`/`remaining` are optional because the API omits the
/// snapshot for accounts without the feature; `unlimited` accounts carry
/// no meaningful counts either.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PremiumQuota {
    /// GitHub login the quota belongs to.
    pub login: String,
    /// Total premium requests in the current period.
    pub entitlement: Option<i64>,
    /// Premium requests still available.
    pub remaining: Option<i64>,
    /// True when the account has no premium-request cap.
    pub unlimited: bool,
    /// When this snapshot was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl PremiumQuota {
    /// Remaining quota as a percentage of the entitlement, if both are known.
    pub fn remaining_percent(&self) -> Option<f64> {
        let remaining = self.remaining?;
        let entitlement = self.entitlement?;
        if entitlement > 0 {
            #[allow(clippy::cast_precision_loss)]
            let percent = (remaining as f64 / entitlement as f64) * 100.0;
            Some(percent)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(entitlement: Option<i64>, remaining: Option<i64>, unlimited: bool) -> PremiumQuota {
        PremiumQuota {
            login: "octocat".to_string(),
            entitlement,
            remaining,
            unlimited,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_remaining_percent() {
        assert_eq!(
            snapshot(Some(300), Some(150), false).remaining_percent(),
            Some(50.0)
        );
    }

    #[test]
    fn test_remaining_percent_missing_counts() {
        assert_eq!(snapshot(None, Some(10), false).remaining_percent(), None);
        assert_eq!(snapshot(Some(300), None, false).remaining_percent(), None);
    }

    #[test]
    fn test_remaining_percent_zero_entitlement() {
        assert_eq!(snapshot(Some(0), Some(0), false).remaining_percent(), None);
    }
}
