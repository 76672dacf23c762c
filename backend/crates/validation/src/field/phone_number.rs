//! Phone Number Validator
//!
//! Optional field. Formatting characters are dropped and only the digits
//! are kept.

use crate::result::ValidationResult;

pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;

/// `Valid(None)` when nothing was entered, otherwise the digits
///
/// Whitespace counts as input and fails the digit count.
pub fn validate_phone_number(raw: &str) -> ValidationResult<Option<String>> {
    if raw.is_empty() {
        return ValidationResult::Valid(None);
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len()) {
        return ValidationResult::invalid(format!(
            "Phone number must be between {} and {} digits",
            PHONE_MIN_DIGITS, PHONE_MAX_DIGITS
        ));
    }

    ValidationResult::Valid(Some(digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional() {
        assert_eq!(validate_phone_number(""), ValidationResult::Valid(None));
    }

    #[test]
    fn test_whitespace_only_is_not_empty() {
        assert_eq!(
            validate_phone_number("   ").message(),
            Some("Phone number must be between 10 and 15 digits")
        );
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(
            validate_phone_number("+91 (987) 654-3210").into_result(),
            Ok(Some("919876543210".to_string()))
        );
    }

    #[test]
    fn test_digit_count() {
        assert!(!validate_phone_number("12345").is_valid());
        assert!(!validate_phone_number("1234567890123456").is_valid());
        assert!(validate_phone_number("1234567890").is_valid());
        assert!(!validate_phone_number("call me").is_valid());
    }
}
