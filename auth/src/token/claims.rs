use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Principal role carried by access tokens.
///
/// Closed set; unknown tags are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Ordinary client account.
    #[serde(rename = "CL")]
    Client,
    /// Administrator account.
    #[serde(rename = "SA")]
    Admin,
}

impl Role {
    /// Wire tag for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "CL",
            Role::Admin => "SA",
        }
    }

    /// Parse from a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "CL" => Some(Role::Client),
            "SA" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminator keeping access and refresh tokens from standing in for one
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenPurpose {
    /// Short-lived credential authorizing API requests.
    #[serde(rename = "access")]
    Access,
    /// Credential used solely to obtain new access tokens.
    #[serde(rename = "refresh")]
    Refresh,
}

impl TokenPurpose {
    /// Wire tag for this purpose.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPurpose::Access => "access",
            TokenPurpose::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims embedded in a signed token.
///
/// Immutable once signed. There is no server-side token state: expiry is
/// enforced purely by comparing `expires_at` to the current time at
/// verification, and the only other way a token dies is by failing the
/// signature check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Contact identifier of the principal.
    pub subject: String,

    /// Principal role. Present on access tokens, absent on refresh tokens:
    /// the caller re-supplies the role when exchanging a refresh token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Issuance time (Unix timestamp).
    #[serde(rename = "issuedAt")]
    pub issued_at: i64,

    /// Absolute expiry time (Unix timestamp, not a duration).
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,

    /// What this token may be used for.
    pub purpose: TokenPurpose,
}

impl Claims {
    /// Check expiry against the given time.
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tags() {
        assert_eq!(Role::Client.as_str(), "CL");
        assert_eq!(Role::Admin.as_str(), "SA");
        assert_eq!(Role::from_tag("CL"), Some(Role::Client));
        assert_eq!(Role::from_tag("SA"), Some(Role::Admin));
        assert_eq!(Role::from_tag("XX"), None);
    }

    #[test]
    fn test_wire_field_names() {
        let claims = Claims {
            subject: "u1".to_string(),
            role: Some(Role::Client),
            issued_at: 1_000,
            expires_at: 2_000,
            purpose: TokenPurpose::Access,
        };

        let value = serde_json::to_value(&claims).expect("Failed to serialize claims");
        assert_eq!(value["subject"], "u1");
        assert_eq!(value["role"], "CL");
        assert_eq!(value["issuedAt"], 1_000);
        assert_eq!(value["expiresAt"], 2_000);
        assert_eq!(value["purpose"], "access");
    }

    #[test]
    fn test_refresh_claims_omit_role() {
        let claims = Claims {
            subject: "u1".to_string(),
            role: None,
            issued_at: 1_000,
            expires_at: 2_000,
            purpose: TokenPurpose::Refresh,
        };

        let value = serde_json::to_value(&claims).expect("Failed to serialize claims");
        assert!(value.get("role").is_none());
        assert_eq!(value["purpose"], "refresh");
    }

    #[test]
    fn test_deserialize_without_role() {
        let claims: Claims = serde_json::from_str(
            r#"{"subject":"u1","issuedAt":1000,"expiresAt":2000,"purpose":"refresh"}"#,
        )
        .expect("Failed to deserialize claims");

        assert_eq!(claims.subject, "u1");
        assert_eq!(claims.role, None);
        assert_eq!(claims.purpose, TokenPurpose::Refresh);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            subject: "u1".to_string(),
            role: None,
            issued_at: 900,
            expires_at: 1_000,
            purpose: TokenPurpose::Access,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1_000)); // Exactly at expiration
        assert!(claims.is_expired(1_001));
    }
}
