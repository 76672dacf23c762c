//! Roll Number Validator
//!
//! Institution roll numbers are uppercase alphanumeric. Whitespace is
//! stripped anywhere in the input before checking.

use crate::result::ValidationResult;

pub const ROLL_NUMBER_MIN_LENGTH: usize = 3;
pub const ROLL_NUMBER_MAX_LENGTH: usize = 20;

/// Returns the cleaned roll number on success
pub fn validate_roll_number(raw: &str) -> ValidationResult<String> {
    let clean: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if clean.is_empty() {
        return ValidationResult::invalid("Roll number is required");
    }

    let length = clean.chars().count();
    if !(ROLL_NUMBER_MIN_LENGTH..=ROLL_NUMBER_MAX_LENGTH).contains(&length) {
        return ValidationResult::invalid(format!(
            "Roll number must be between {} and {} characters",
            ROLL_NUMBER_MIN_LENGTH, ROLL_NUMBER_MAX_LENGTH
        ));
    }

    if !clean.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
        return ValidationResult::invalid("Roll number can only contain letters and numbers");
    }

    ValidationResult::Valid(clean)
}
