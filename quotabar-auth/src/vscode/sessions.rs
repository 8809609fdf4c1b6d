//! Decrypted session record parsing and selection.

use serde::Deserialize;

use quotabar_core::AuthError;

/// One GitHub authentication session stored by the editor.
///
/// The stored records carry more fields (account, scopes, id); only the
/// access token matters here and unknown fields are ignored so newer
/// editor versions keep parsing. `accessToken` itself is required: a
/// record without it is structurally invalid, while an empty token is
/// valid and simply skipped by the selection rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// OAuth access token (may be empty).
    pub access_token: String,
}

/// Parses decrypted plaintext as an array of session records.
pub fn parse_sessions(plaintext: &[u8]) -> Result<Vec<AuthSession>, AuthError> {
    serde_json::from_slice(plaintext).map_err(|e| AuthError::MalformedSession(e.to_string()))
}

/// Selects the first session with a non-empty access token.
pub fn first_access_token(sessions: &[AuthSession]) -> Option<&str> {
    sessions
        .iter()
        .map(|session| session.access_token.as_str())
        .find(|token| !token.is_empty())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tolerates_unknown_fields() {
        let sessions = parse_sessions(
            br#"[{"id":"abc","accessToken":"tok_1","scopes":["read:user"],"account":{"label":"x"}}]"#,
        )
        .unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].access_token, "tok_1");
    }

    #[test]
    fn test_selection_skips_empty_tokens() {
        let sessions = parse_sessions(
            br#"[{"accessToken":""},{"accessToken":"tok_2"},{"accessToken":"tok_3"}]"#,
        )
        .unwrap();
        assert_eq!(first_access_token(&sessions), Some("tok_2"));
    }

    #[test]
    fn test_selection_none_when_all_empty() {
        let sessions = parse_sessions(br#"[{"accessToken":""}]"#).unwrap();
        assert_eq!(first_access_token(&sessions), None);
        assert_eq!(first_access_token(&[]), None);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            parse_sessions(br#"{"accessToken":"tok_1"}"#),
            Err(AuthError::MalformedSession(_))
        ));
        assert!(matches!(
            parse_sessions(b"garbage"),
            Err(AuthError::MalformedSession(_))
        ));
    }

    #[test]
    fn test_parse_rejects_record_without_token_field() {
        assert!(matches!(
            parse_sessions(br#"[{"id":"abc"}]"#),
            Err(AuthError::MalformedSession(_))
        ));
    }
}
