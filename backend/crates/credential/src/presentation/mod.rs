//! Presentation Layer
//!
//! DTOs, token extraction and axum middleware.

pub mod dto;
pub mod extract;
pub mod middleware;

pub use dto::{AccountView, AuthResponse, SessionResponse, UserSummary};
pub use extract::{extract_token, extract_token_with_cookie};
pub use middleware::{require_role, require_token};
