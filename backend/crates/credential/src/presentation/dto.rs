//! API DTOs (Data Transfer Objects)

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::user_role::UserRole;

// ============================================================================
// Account projection
// ============================================================================

/// Read access to the account fields exposed to clients
///
/// Implemented by whatever user model the persistence layer loads, so the
/// projection never carries password hashes or other private columns.
pub trait AccountView {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn email(&self) -> &str;
    fn role(&self) -> UserRole;
    fn profile_image(&self) -> Option<&str>;
}

/// Public user fields returned with a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub profile_image: Option<String>,
}

impl UserSummary {
    pub fn from_account(account: &impl AccountView) -> Self {
        Self {
            id: account.id().to_string(),
            name: account.name().to_string(),
            email: account.email().to_string(),
            role: account.role(),
            profile_image: account.profile_image().map(str::to_string),
        }
    }
}

impl AccountView for UserSummary {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn role(&self) -> UserRole {
        self.role
    }

    fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }
}

// ============================================================================
// Auth response
// ============================================================================

/// Sign-in / sign-up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(skip)]
    pub status: StatusCode,
    pub success: bool,
    pub message: String,
    pub token: String,
    pub refresh_token: String,
    pub user: UserSummary,
    /// Lifetime label, e.g. `"7d"`
    pub expires_in: String,
}

impl IntoResponse for AuthResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

// ============================================================================
// Session
// ============================================================================

/// Current session response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    pub role: Option<UserRole>,
    pub issued_at_ms: Option<i64>,
    pub expires_at_ms: Option<i64>,
}

impl From<&crate::domain::claims::Claims> for SessionResponse {
    fn from(claims: &crate::domain::claims::Claims) -> Self {
        Self {
            id: claims.id.clone(),
            role: claims.role,
            issued_at_ms: claims.issued_at().map(|t| t.timestamp_millis()),
            expires_at_ms: claims.expires_at().map(|t| t.timestamp_millis()),
        }
    }
}
