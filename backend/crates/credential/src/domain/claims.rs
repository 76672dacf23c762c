//! Token Claims
//!
//! Decoded payload of a session token. Timestamps are Unix seconds, the
//! same representation used on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user_role::UserRole;
use crate::error::{CredentialError, CredentialResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// Issued at
    pub iat: i64,
    /// Expiration
    pub exp: i64,
}

impl Claims {
    pub fn new(id: impl Into<String>, role: Option<UserRole>, iat: i64, exp: i64) -> Self {
        Self {
            id: id.into(),
            role,
            iat,
            exp,
        }
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// A token stays valid through its `exp` second
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp < now.timestamp()
    }

    /// Role guard: succeeds if the claims carry one of `allowed`
    pub fn authorize(&self, allowed: &[UserRole]) -> CredentialResult<()> {
        match self.role {
            Some(role) if allowed.contains(&role) => Ok(()),
            role => Err(CredentialError::InsufficientRole { role }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_omitted_on_wire() {
        let claims = Claims::new("abc", None, 10, 20);
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("role").is_none());

        let decoded: Claims = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_is_expired_at_boundary() {
        let claims = Claims::new("abc", None, 0, 1_000);
        let at = |secs| DateTime::from_timestamp(secs, 0).unwrap();
        assert!(!claims.is_expired_at(at(999)));
        assert!(!claims.is_expired_at(at(1_000)));
        assert!(claims.is_expired_at(at(1_001)));
    }

    #[test]
    fn test_authorize() {
        let teacher = Claims::new("abc", Some(UserRole::Teacher), 0, 1);
        assert!(teacher.authorize(&[UserRole::Teacher, UserRole::Admin]).is_ok());
        assert!(matches!(
            teacher.authorize(&[UserRole::Admin]),
            Err(CredentialError::InsufficientRole {
                role: Some(UserRole::Teacher)
            })
        ));

        let anonymous = Claims::new("abc", None, 0, 1);
        assert!(matches!(
            anonymous.authorize(&[UserRole::Student]),
            Err(CredentialError::InsufficientRole { role: None })
        ));
    }
}
