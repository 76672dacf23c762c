//! Object Id Validator
//!
//! Record identifiers are 24 hexadecimal characters.

use crate::result::ValidationResult;

pub const OBJECT_ID_LENGTH: usize = 24;

pub fn validate_object_id(raw: &str) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult::invalid("ID is required");
    }

    if raw.len() != OBJECT_ID_LENGTH || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return ValidationResult::invalid("Invalid ID format");
    }

    ValidationResult::ok()
}
