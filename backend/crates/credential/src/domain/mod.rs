//! Domain Layer
//!
//! Token claims and the roles they carry.

pub mod claims;
pub mod user_role;

pub use claims::Claims;
pub use user_role::UserRole;
