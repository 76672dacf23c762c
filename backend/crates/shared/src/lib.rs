//! Shared Kernel
//!
//! The smallest vocabulary shared by every backend crate:
//! - Unified error type and result alias
//! - Error classification mapped to HTTP status codes
//! - Field-level violations for aggregated validation failures
//!
//! Only things with the same meaning in every crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
    pub mod violation;
}

pub use error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
    violation::FieldViolation,
};
