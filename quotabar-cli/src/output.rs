//! Output formatting for quota snapshots and resolution failures.

use chrono::Local;
use quotabar_core::{meta, AuthError, PremiumQuota};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

// Progress bar characters
const BAR_FULL: char = '█';
const BAR_EMPTY: char = '░';

/// Progress bar width in characters.
const BAR_WIDTH: usize = 10;

// ============================================================================
// Text Formatter
// ============================================================================

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a quota snapshot as a multi-line report.
    pub fn format_quota(&self, quota: &PremiumQuota, source: &str) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{} {}",
            self.bold(meta::DISPLAY_NAME),
            self.dim(&format!("({source})"))
        ));
        lines.push(format!("User: {}", quota.login));

        if quota.unlimited {
            lines.push("Premium requests: Unlimited".to_string());
            lines.push(format!("{} ∞", self.bar(100.0)));
        } else if let (Some(remaining), Some(entitlement)) = (quota.remaining, quota.entitlement) {
            lines.push(format!(
                "Premium requests: {remaining} / {entitlement} remaining"
            ));
            if let Some(percent) = quota.remaining_percent() {
                lines.push(format!("{} {percent:.1}%", self.bar(percent)));
            }
        } else {
            lines.push("Premium requests: —".to_string());
        }

        lines.push(format!(
            "Last updated: {}",
            quota.fetched_at.with_timezone(&Local).format("%H:%M")
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Formats a quota snapshot as a single line (watch mode).
    pub fn quota_line(quota: &PremiumQuota) -> String {
        if quota.unlimited {
            return format!("{} — Unlimited premium requests", quota.login);
        }

        match (quota.remaining, quota.entitlement, quota.remaining_percent()) {
            (Some(remaining), Some(entitlement), Some(percent)) => format!(
                "{} — {remaining}/{entitlement} remaining ({percent:.1}%)",
                quota.login
            ),
            (Some(remaining), Some(entitlement), None) => {
                format!("{} — {remaining}/{entitlement} remaining", quota.login)
            }
            _ => format!("{} — no premium-request data", quota.login),
        }
    }

    /// Formats a resolution failure with per-provider attribution.
    pub fn format_resolution_failure(&self, err: &AuthError) -> String {
        let mut lines = vec![err.to_string()];

        if let Some(failures) = err.failures() {
            lines.push(String::new());
            lines.push(self.bold("Setup required"));
            for failure in failures {
                lines.push(format!("  {}: {}", failure.provider, failure.message));
            }
            lines.push(String::new());
            lines.push(format!(
                "  Install VS Code: {}",
                self.dim("https://code.visualstudio.com/")
            ));
            lines.push(format!(
                "  Install GitHub CLI (gh): {}",
                self.dim("https://cli.github.com/")
            ));
            lines.push(format!("  Sign in with gh: {}", self.dim("gh auth login")));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// A green check marker followed by a message.
    pub fn ok_marker(&self, message: &str) -> String {
        if self.use_colors {
            format!("{GREEN}✓{RESET} {message}")
        } else {
            format!("✓ {message}")
        }
    }

    /// A red cross marker followed by a message.
    pub fn fail_marker(&self, message: &str) -> String {
        if self.use_colors {
            format!("{RED}✗{RESET} {message}")
        } else {
            format!("✗ {message}")
        }
    }

    /// Renders the remaining-quota progress bar.
    fn bar(&self, percent: f64) -> String {
        let clamped = percent.clamp(0.0, 100.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);

        let mut bar = String::with_capacity(BAR_WIDTH + 2);
        bar.push('[');
        for _ in 0..filled {
            bar.push(BAR_FULL);
        }
        for _ in filled..BAR_WIDTH {
            bar.push(BAR_EMPTY);
        }
        bar.push(']');
        bar
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter for scripting consumers.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serializes a quota snapshot.
    pub fn format_quota(&self, quota: &PremiumQuota) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(quota)
        } else {
            serde_json::to_string(quota)
        }
    }

    /// Serializes a resolution failure with per-provider attribution.
    pub fn format_resolution_failure(&self, err: &AuthError) -> String {
        let failures: Vec<_> = err
            .failures()
            .unwrap_or_default()
            .iter()
            .map(|f| {
                serde_json::json!({
                    "provider": f.provider,
                    "message": f.message,
                })
            })
            .collect();

        let value = serde_json::json!({
            "error": err.to_string(),
            "failures": failures,
        });

        if self.pretty {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        } else {
            value.to_string()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
