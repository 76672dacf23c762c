//! Field Validators
//!
//! One module per field kind. Every validator is pure: the same input
//! always yields the same [`ValidationResult`](crate::ValidationResult).

pub mod academic;
pub mod email;
pub mod file;
pub mod name;
pub mod object_id;
pub mod password;
pub mod phone_number;
pub mod roll_number;
pub mod text;
pub mod url;
