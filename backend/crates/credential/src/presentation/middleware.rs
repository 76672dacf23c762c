//! Credential Middleware
//!
//! Middleware for requiring a valid token (and optionally a role) on
//! protected routes.
//!
//! ```rust,ignore
//! let issuer = Arc::new(TokenIssuer::new(CredentialConfig::from_env()?));
//! let admin = Router::new()
//!     .route("/community", get(manage_community))
//!     .layer(from_fn_with_state(ADMIN_ONLY, require_role))
//!     .layer(from_fn_with_state(issuer.clone(), require_token));
//! ```

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::issuer::TokenIssuer;
use crate::domain::{claims::Claims, user_role::UserRole};
use crate::error::CredentialError;
use crate::presentation::extract::extract_token_with_cookie;

/// Roles allowed through [`require_role`]
pub type AllowedRoles = &'static [UserRole];

pub const ADMIN_ONLY: AllowedRoles = &[UserRole::Admin];
pub const STAFF_ONLY: AllowedRoles = &[UserRole::Teacher, UserRole::Admin];

/// Verify the request token and store its [`Claims`] in request extensions
pub async fn require_token(
    State(issuer): State<Arc<TokenIssuer>>,
    mut req: Request,
    next: Next,
) -> Result<Response, CredentialError> {
    let token = extract_token_with_cookie(req.headers(), req.uri(), &issuer.config().cookie_name)
        .ok_or(CredentialError::MissingToken)?;

    let claims = issuer.verify_token(&token)?;

    tracing::debug!(subject = %claims.id, path = %req.uri().path(), "Token accepted");

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Reject requests whose claims carry none of `allowed`
///
/// Must run after [`require_token`].
pub async fn require_role(
    State(allowed): State<AllowedRoles>,
    req: Request,
    next: Next,
) -> Result<Response, CredentialError> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .ok_or(CredentialError::MissingToken)?;

    claims.authorize(allowed)?;

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::CredentialConfig;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use chrono::Duration;
    use tower::ServiceExt;

    fn issuer() -> Arc<TokenIssuer> {
        Arc::new(TokenIssuer::new(CredentialConfig::with_secret(
            "middleware-secret",
        )))
    }

    async fn whoami(claims: Claims) -> String {
        claims.id
    }

    fn app(issuer: Arc<TokenIssuer>) -> Router {
        let admin = Router::new()
            .route("/admin", get(|| async { "ok" }))
            .layer(from_fn_with_state(ADMIN_ONLY, require_role));
        let staff = Router::new()
            .route("/staff", get(|| async { "ok" }))
            .layer(from_fn_with_state(STAFF_ONLY, require_role));

        Router::new()
            .route("/me", get(whoami))
            .merge(admin)
            .merge(staff)
            .layer(from_fn_with_state(issuer, require_token))
    }

    fn get_with_bearer(uri: &str, token: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_passes() {
        let issuer = issuer();
        let token = issuer.issue_token("student-1", Some(UserRole::Student), None).unwrap();

        let response = app(issuer)
            .oneshot(get_with_bearer("/me", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"student-1");
    }

    #[tokio::test]
    async fn test_missing_token_rejected() {
        let request = axum::http::Request::builder()
            .uri("/me")
            .body(Body::empty())
            .unwrap();

        let response = app(issuer()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let issuer = issuer();
        let token = issuer
            .issue_token("student-1", None, Some(Duration::seconds(-1)))
            .unwrap();

        let response = app(issuer)
            .oneshot(get_with_bearer("/me", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_cookie_token_accepted() {
        let issuer = issuer();
        let token = issuer.issue_token("teacher-1", Some(UserRole::Teacher), None).unwrap();
        let request = axum::http::Request::builder()
            .uri("/me")
            .header(header::COOKIE, format!("token={}", token))
            .body(Body::empty())
            .unwrap();

        let response = app(issuer).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_role_guard() {
        let issuer = issuer();
        let student = issuer.issue_token("s", Some(UserRole::Student), None).unwrap();
        let admin = issuer.issue_token("a", Some(UserRole::Admin), None).unwrap();

        let response = app(issuer.clone())
            .oneshot(get_with_bearer("/admin", &student))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app(issuer)
            .oneshot(get_with_bearer("/admin", &admin))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_staff_guard() {
        let issuer = issuer();
        let cases = [
            (UserRole::Student, StatusCode::FORBIDDEN),
            (UserRole::Teacher, StatusCode::OK),
            (UserRole::Admin, StatusCode::OK),
        ];

        for (role, expected) in cases {
            let token = issuer.issue_token("u", Some(role), None).unwrap();
            let response = app(issuer.clone())
                .oneshot(get_with_bearer("/staff", &token))
                .await
                .unwrap();
            assert_eq!(response.status(), expected, "{role}");
        }

        let anonymous = issuer.issue_token("u", None, None).unwrap();
        let response = app(issuer)
            .oneshot(get_with_bearer("/staff", &anonymous))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
