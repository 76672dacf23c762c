//! Credential Error Types
//!
//! Credential-specific error variants that integrate with the unified
//! `kernel::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use kernel::{AppError, ErrorKind};
use thiserror::Error;

use crate::domain::user_role::UserRole;

pub type CredentialResult<T> = Result<T, CredentialError>;

#[derive(Debug, Error)]
pub enum CredentialError {
    /// Missing signing secret or unusable setting. Fatal, not retried.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad signature, malformed token, or wrong algorithm
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Signature is valid but the expiration has passed
    #[error("Token has expired")]
    ExpiredToken,

    /// No token in the Authorization header, cookie, or query string
    #[error("No token provided")]
    MissingToken,

    /// Authenticated, but the role is not allowed on this route
    #[error("Role {} is not authorized", .role.map(|r| r.code()).unwrap_or("none"))]
    InsufficientRole { role: Option<UserRole> },

    /// Token encoding failed
    #[error("Token signing failed: {0}")]
    Signing(String),
}

impl CredentialError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CredentialError::InvalidToken(_)
            | CredentialError::ExpiredToken
            | CredentialError::MissingToken => StatusCode::UNAUTHORIZED,
            CredentialError::InsufficientRole { .. } => StatusCode::FORBIDDEN,
            CredentialError::Config(_) | CredentialError::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CredentialError::InvalidToken(_)
            | CredentialError::ExpiredToken
            | CredentialError::MissingToken => ErrorKind::Unauthorized,
            CredentialError::InsufficientRole { .. } => ErrorKind::Forbidden,
            CredentialError::Config(_) | CredentialError::Signing(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Callers may refresh or ask the user to sign in again
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            CredentialError::Config(_) | CredentialError::Signing(_)
        )
    }

    /// Convert to AppError
    ///
    /// Decode and configuration details stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            CredentialError::InvalidToken(_) => AppError::unauthorized("Not authorized, invalid token")
                .with_action("Please sign in again"),
            CredentialError::ExpiredToken => AppError::unauthorized("Token has expired")
                .with_action("Refresh your session or sign in again"),
            CredentialError::MissingToken => {
                AppError::unauthorized("Not authorized, no token provided")
                    .with_action("Please sign in")
            }
            CredentialError::InsufficientRole { .. } => {
                AppError::forbidden(self.to_string())
            }
            CredentialError::Config(_) | CredentialError::Signing(_) => {
                AppError::internal("Authentication is unavailable")
            }
        }
    }

    fn log(&self) {
        match self {
            CredentialError::Config(msg) => {
                tracing::error!(message = %msg, "Credential configuration error");
            }
            CredentialError::Signing(msg) => {
                tracing::error!(message = %msg, "Token signing failed");
            }
            CredentialError::InvalidToken(reason) => {
                tracing::warn!(reason = %reason, "Rejected invalid token");
            }
            CredentialError::InsufficientRole { role } => {
                tracing::warn!(role = ?role, "Role not authorized for route");
            }
            _ => {
                tracing::debug!(error = %self, "Credential error");
            }
        }
    }
}

impl From<jsonwebtoken::errors::Error> for CredentialError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::ExpiredSignature => CredentialError::ExpiredToken,
            _ => CredentialError::InvalidToken(err.to_string()),
        }
    }
}

impl IntoResponse for CredentialError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CredentialError::ExpiredToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            CredentialError::InvalidToken("bad".into()).kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            CredentialError::InsufficientRole { role: None }.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            CredentialError::Config("no secret".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(CredentialError::ExpiredToken.is_recoverable());
        assert!(CredentialError::MissingToken.is_recoverable());
        assert!(!CredentialError::Config("no secret".into()).is_recoverable());
    }

    #[test]
    fn test_app_error_hides_details() {
        let err = CredentialError::InvalidToken("InvalidSignature".into()).to_app_error();
        assert!(!err.message().contains("InvalidSignature"));

        let err = CredentialError::Config("JWT_SECRET is not set".into()).to_app_error();
        assert!(!err.message().contains("JWT_SECRET"));
    }

    #[test]
    fn test_jwt_error_mapping() {
        let expired = jsonwebtoken::errors::Error::from(JwtErrorKind::ExpiredSignature);
        assert!(matches!(
            CredentialError::from(expired),
            CredentialError::ExpiredToken
        ));

        let bad = jsonwebtoken::errors::Error::from(JwtErrorKind::InvalidSignature);
        assert!(matches!(
            CredentialError::from(bad),
            CredentialError::InvalidToken(_)
        ));
    }

    #[test]
    fn test_role_message() {
        let err = CredentialError::InsufficientRole {
            role: Some(UserRole::Student),
        };
        assert_eq!(err.to_string(), "Role student is not authorized");
        let err = CredentialError::InsufficientRole { role: None };
        assert_eq!(err.to_string(), "Role none is not authorized");
    }
}
