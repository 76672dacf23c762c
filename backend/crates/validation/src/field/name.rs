//! Name Validator

use crate::result::ValidationResult;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;

/// Letters, whitespace, hyphens and apostrophes; returns the trimmed name
pub fn validate_name(raw: &str) -> ValidationResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return ValidationResult::invalid("Name is required");
    }

    let length = name.chars().count();
    if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
        return ValidationResult::invalid(format!(
            "Name must be between {} and {} characters",
            NAME_MIN_LENGTH, NAME_MAX_LENGTH
        ));
    }

    let allowed = |c: char| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '\'';
    if !name.chars().all(allowed) {
        return ValidationResult::invalid(
            "Name can only contain letters, spaces, hyphens, and apostrophes",
        );
    }

    ValidationResult::Valid(name.to_string())
}
