//! Token Inspection
//!
//! Reads the expiration of a token without verifying its signature.
//! For display logic only: never authorize on these results.

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ExpiryOnly {
    #[serde(default)]
    exp: Option<i64>,
}

/// `exp` of an undecodable token is `None`
fn peek_exp(token: &str) -> Option<i64> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<ExpiryOnly>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()
        .and_then(|data| data.claims.exp)
}

/// True when the token cannot be decoded, has no `exp`, or `exp` has passed
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, Utc::now())
}

pub fn is_expired_at(token: &str, now: DateTime<Utc>) -> bool {
    match peek_exp(token) {
        Some(exp) => exp < now.timestamp(),
        None => true,
    }
}

/// Expiration instant, `None` on decode failure or missing `exp`
pub fn expiration_of(token: &str) -> Option<DateTime<Utc>> {
    peek_exp(token).and_then(|exp| DateTime::from_timestamp(exp, 0))
}
