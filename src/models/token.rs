// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! OAuth token as persisted in the token file.

use serde::{Deserialize, Serialize};

/// Strava OAuth token response, saved verbatim to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp
    #[serde(default)]
    pub expires_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl StoredToken {
    /// Whether the access token expires within `margin_secs` of `now`.
    pub fn needs_refresh(&self, now: i64, margin_secs: i64) -> bool {
        now > self.expires_at - margin_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_refresh_margin() {
        let token = StoredToken {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_at: 1_000,
            token_type: None,
        };
        assert!(!token.needs_refresh(900, 60));
        assert!(token.needs_refresh(941, 60));
    }

    #[test]
    fn test_exchange_response_extra_fields_ignored() {
        let json = r#"{"token_type":"Bearer","expires_at":1700000000,"expires_in":21600,
            "refresh_token":"r","access_token":"a","athlete":{"id":1}}"#;
        let token: StoredToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "a");
        assert_eq!(token.expires_at, 1_700_000_000);
    }
}
