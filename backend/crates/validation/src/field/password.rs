//! Password Validator
//!
//! Strength rules for new passwords. The value itself is never normalized
//! or logged.

use crate::result::ValidationResult;

pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_MAX_LENGTH: usize = 128;

pub fn validate_password(raw: &str) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult::invalid("Password is required");
    }

    let length = raw.chars().count();
    if length < PASSWORD_MIN_LENGTH {
        return ValidationResult::invalid(format!(
            "Password must be at least {} characters long",
            PASSWORD_MIN_LENGTH
        ));
    }
    if length > PASSWORD_MAX_LENGTH {
        return ValidationResult::invalid(format!(
            "Password cannot exceed {} characters",
            PASSWORD_MAX_LENGTH
        ));
    }

    let has_upper = raw.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = raw.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = raw.chars().any(|c| c.is_ascii_digit());
    if !(has_upper && has_lower && has_digit) {
        return ValidationResult::invalid(
            "Password must contain at least one uppercase letter, one lowercase letter, and one number",
        );
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password() {
        assert!(validate_password("Abc123").is_valid());
        assert!(validate_password("correct Horse 9 battery").is_valid());
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(
            validate_password("Ab1").message(),
            Some("Password must be at least 6 characters long")
        );

        let long = format!("Aa1{}", "x".repeat(PASSWORD_MAX_LENGTH));
        assert_eq!(
            validate_password(&long).message(),
            Some("Password cannot exceed 128 characters")
        );

        let exact = format!("Aa1{}", "x".repeat(PASSWORD_MAX_LENGTH - 3));
        assert!(validate_password(&exact).is_valid());
    }

    #[test]
    fn test_character_classes() {
        for password in ["abc123", "ABC123", "Abcdef"] {
            assert!(
                validate_password(password)
                    .message()
                    .unwrap()
                    .contains("uppercase"),
                "{password}"
            );
        }
    }
}
