//! Free Text Validator
//!
//! Titles, descriptions and comments. Input is trimmed, measured, then
//! passed through [`sanitize_html`].

use crate::result::ValidationResult;
use crate::sanitize::sanitize_html;

/// Length and presence rules for one text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRules<'a> {
    /// Label used in messages
    pub field: &'a str,
    pub min_length: usize,
    pub max_length: usize,
    pub required: bool,
}

impl<'a> TextRules<'a> {
    /// Optional, 0 to 1000 characters
    pub const fn new(field: &'a str) -> Self {
        Self {
            field,
            min_length: 0,
            max_length: 1000,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }
}

/// Returns the trimmed and sanitized text
///
/// An optional field left empty passes with an empty string and skips
/// the minimum length check.
pub fn validate_text(raw: &str, rules: &TextRules<'_>) -> ValidationResult<String> {
    let text = raw.trim();
    if text.is_empty() {
        return if rules.required {
            ValidationResult::invalid(format!("{} is required", rules.field))
        } else {
            ValidationResult::Valid(String::new())
        };
    }

    let length = text.chars().count();
    if length < rules.min_length {
        return ValidationResult::invalid(format!(
            "{} must be at least {} characters",
            rules.field, rules.min_length
        ));
    }
    if length > rules.max_length {
        return ValidationResult::invalid(format!(
            "{} cannot exceed {} characters",
            rules.field, rules.max_length
        ));
    }

    ValidationResult::Valid(sanitize_html(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE: TextRules<'static> = TextRules::new("Title").required().length(3, 10);

    #[test]
    fn test_required_and_optional() {
        assert_eq!(validate_text("  ", &TITLE).message(), Some("Title is required"));
        assert_eq!(
            validate_text("", &TextRules::new("Bio").length(10, 200)).into_result(),
            Ok(String::new())
        );
    }

    #[test]
    fn test_length() {
        assert_eq!(
            validate_text("ab", &TITLE).message(),
            Some("Title must be at least 3 characters")
        );
        assert_eq!(
            validate_text("abcdefghijk", &TITLE).message(),
            Some("Title cannot exceed 10 characters")
        );
        assert_eq!(validate_text("  abc  ", &TITLE).into_result(), Ok("abc".to_string()));
    }

    #[test]
    fn test_sanitized() {
        let rules = TextRules::new("Comment");
        assert_eq!(
            validate_text("<script>x()</script> nice work", &rules).into_result(),
            Ok("nice work".to_string())
        );
    }
}
