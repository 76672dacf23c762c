//! Credential Issuer
//!
//! Layered the same way as the other backend crates:
//! - `domain/` - Claims and roles
//! - `application/` - Configuration, issuance, verification, inspection, secrets
//! - `presentation/` - DTOs, token extraction, axum middleware
//!
//! ## Security Model
//! - Session tokens are HS256 JWTs carrying `{id, role?, iat, exp}`
//! - Verification checks the signature before the expiration
//! - Refresh secrets and API keys are CSPRNG hex strings
//! - Only SHA-256 digests of tokens are meant to be persisted

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CredentialConfig;
pub use application::inspect::{expiration_of, is_expired};
pub use application::issuer::TokenIssuer;
pub use application::lifetime::TokenLifetime;
pub use application::secrets::{
    api_key, hash_for_storage, matches_stored_hash, random_token, refresh_secret,
};
pub use domain::{Claims, UserRole};
pub use error::{CredentialError, CredentialResult};
pub use presentation::extract::extract_token;

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

pub mod models {
    pub use crate::presentation::dto::*;
}
