//! Email Validator
//!
//! Syntactic check only. Deliverability is confirmed elsewhere.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::result::ValidationResult;

/// Something, `@`, something, `.`, something; no whitespace and no second `@`
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn validate_email(raw: &str) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult::invalid("Email is required");
    }

    if !EMAIL_RE.is_match(raw) {
        return ValidationResult::invalid("Please provide a valid email address");
    }

    ValidationResult::ok()
}
