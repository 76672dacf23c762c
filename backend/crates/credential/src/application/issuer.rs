//! Token Issuer
//!
//! Mints and verifies HS256 session tokens with the configured secret.
//! The `*_at` variants take the clock as a parameter; given the same
//! subject, role, ttl, secret and instant they produce the same token.

use axum::http::{HeaderValue, StatusCode};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::application::config::CredentialConfig;
use crate::application::secrets;
use crate::domain::{claims::Claims, user_role::UserRole};
use crate::error::{CredentialError, CredentialResult};
use crate::presentation::dto::{AccountView, AuthResponse, UserSummary};

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Clone)]
pub struct TokenIssuer {
    config: CredentialConfig,
}

impl TokenIssuer {
    pub fn new(config: CredentialConfig) -> Self {
        if !config.has_secret() {
            tracing::warn!("TokenIssuer created without a signing secret");
        }
        Self { config }
    }

    pub fn config(&self) -> &CredentialConfig {
        &self.config
    }

    // ========================================================================
    // Issuance
    // ========================================================================

    /// Sign a token for `subject_id`
    ///
    /// `ttl` falls back to the configured default lifetime.
    pub fn issue_token(
        &self,
        subject_id: &str,
        role: Option<UserRole>,
        ttl: Option<Duration>,
    ) -> CredentialResult<String> {
        self.issue_token_at(subject_id, role, ttl, Utc::now())
    }

    pub fn issue_token_at(
        &self,
        subject_id: &str,
        role: Option<UserRole>,
        ttl: Option<Duration>,
        now: DateTime<Utc>,
    ) -> CredentialResult<String> {
        let secret = self.config.secret()?;
        let ttl = ttl.unwrap_or_else(|| self.config.default_lifetime.duration());

        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            CredentialError::Config(format!("token lifetime {}s is out of range", ttl.num_seconds()))
        })?;

        let claims = Claims::new(subject_id, role, now.timestamp(), expires_at.timestamp());

        let token = encode(
            &Header::new(ALGORITHM),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| CredentialError::Signing(e.to_string()))?;

        tracing::debug!(
            subject = %claims.id,
            role = ?claims.role,
            exp = claims.exp,
            "Issued session token"
        );

        Ok(token)
    }

    // ========================================================================
    // Verification
    // ========================================================================

    /// Check signature and expiration, returning the decoded claims
    pub fn verify_token(&self, token: &str) -> CredentialResult<Claims> {
        self.verify_token_at(token, Utc::now())
    }

    pub fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> CredentialResult<Claims> {
        let secret = self.config.secret()?;

        // Expiration is checked below against `now`, with no leeway
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.leeway = 0;

        let data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)?;

        if data.claims.is_expired_at(now) {
            return Err(CredentialError::ExpiredToken);
        }

        Ok(data.claims)
    }

    // ========================================================================
    // Composite helpers
    // ========================================================================

    /// Response body for sign-in and sign-up handlers
    ///
    /// Mints a session token for the account and a fresh refresh secret.
    /// The refresh secret is returned raw; persist it through
    /// [`secrets::hash_for_storage`].
    pub fn build_auth_response(
        &self,
        user: &impl AccountView,
        status: StatusCode,
        message: impl Into<String>,
    ) -> CredentialResult<AuthResponse> {
        let token = self.issue_token(user.id(), Some(user.role()), None)?;

        Ok(AuthResponse {
            status,
            success: true,
            message: message.into(),
            token,
            refresh_token: secrets::refresh_secret(),
            user: UserSummary::from_account(user),
            expires_in: self.config.default_lifetime.label().to_string(),
        })
    }

    /// [`build_auth_response`](Self::build_auth_response) with 200 and `"Success"`
    pub fn auth_response(&self, user: &impl AccountView) -> CredentialResult<AuthResponse> {
        self.build_auth_response(user, StatusCode::OK, "Success")
    }

    /// API key with the configured prefix
    pub fn api_key(&self) -> String {
        secrets::api_key(&self.config.api_key_prefix)
    }

    /// Set-Cookie value carrying `token`
    pub fn token_cookie(&self, token: &str) -> Option<HeaderValue> {
        self.config.cookie_config().set_cookie_header(token)
    }

    /// Set-Cookie value clearing the token cookie
    pub fn clear_token_cookie(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.config.cookie_config().build_delete_cookie()).ok()
    }
}
