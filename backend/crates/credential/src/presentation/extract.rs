//! Token Extraction
//!
//! Locates the bearer credential on an inbound request. Sources are
//! checked in a fixed order: `Authorization: Bearer` header, then the
//! token cookie, then the `token` query parameter.

use axum::extract::{FromRequestParts, Query};
use axum::http::{HeaderMap, Uri, header, request::Parts};
use serde::Deserialize;

use crate::domain::claims::Claims;
use crate::error::CredentialError;

/// Cookie and query parameter name used by [`extract_token`]
pub const TOKEN_PARAM: &str = "token";

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// First token found on the request, or `None`
pub fn extract_token(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    extract_token_with_cookie(headers, uri, TOKEN_PARAM)
}

/// [`extract_token`] with a custom cookie name
pub fn extract_token_with_cookie(
    headers: &HeaderMap,
    uri: &Uri,
    cookie_name: &str,
) -> Option<String> {
    bearer_token(headers)
        .or_else(|| platform::cookie::extract_cookie(headers, cookie_name))
        .or_else(|| query_token(uri))
}

/// `Authorization: Bearer <token>`; the scheme is case-insensitive
///
/// Exactly one word must follow the scheme.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let mut words = value.split_whitespace();
    let scheme = words.next()?;
    let token = words.next()?;

    if words.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token.to_string())
}

fn query_token(uri: &Uri) -> Option<String> {
    let Query(query) = Query::<TokenQuery>::try_from_uri(uri).ok()?;
    query.token.filter(|t| !t.trim().is_empty())
}

/// Claims stored by the `require_token` middleware
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = CredentialError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or(CredentialError::MissingToken)
    }
}
