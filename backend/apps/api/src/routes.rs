//! HTTP routes

use std::sync::Arc;

use axum::{Json, Router, middleware::from_fn_with_state, routing::get};
use credential::middleware::{ADMIN_ONLY, require_role, require_token};
use credential::models::SessionResponse;
use credential::{Claims, TokenIssuer};
use kernel::AppError;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn me(claims: Claims) -> Json<SessionResponse> {
    Json(SessionResponse::from(&claims))
}

async fn admin_ping(claims: Claims) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "pong": true, "id": claims.id }))
}

async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}

pub fn router(issuer: Arc<TokenIssuer>) -> Router {
    let auth = Router::new()
        .route("/me", get(me))
        .layer(from_fn_with_state(issuer.clone(), require_token));

    let admin = Router::new()
        .route("/ping", get(admin_ping))
        .layer(from_fn_with_state(ADMIN_ONLY, require_role))
        .layer(from_fn_with_state(issuer, require_token));

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth)
        .nest("/api/admin", admin)
        .fallback(not_found)
}
