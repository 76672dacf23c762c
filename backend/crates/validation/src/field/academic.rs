//! Academic Period Validators
//!
//! Year of study and semester arrive as form strings. Both must parse as
//! plain integers after trimming; `"2.5"` or `"2nd"` are not numbers.

use crate::result::ValidationResult;

pub const ACADEMIC_YEAR_RANGE: (u8, u8) = (1, 4);
pub const SEMESTER_RANGE: (u8, u8) = (1, 8);

pub fn validate_academic_year(raw: &str) -> ValidationResult<u8> {
    validate_bounded("Academic year", raw, ACADEMIC_YEAR_RANGE)
}

pub fn validate_semester(raw: &str) -> ValidationResult<u8> {
    validate_bounded("Semester", raw, SEMESTER_RANGE)
}

fn validate_bounded(label: &str, raw: &str, (min, max): (u8, u8)) -> ValidationResult<u8> {
    let raw = raw.trim();
    if raw.is_empty() {
        return ValidationResult::invalid(format!("{} is required", label));
    }

    let Ok(value) = raw.parse::<i64>() else {
        return ValidationResult::invalid(format!("{} must be a number", label));
    };

    match u8::try_from(value) {
        Ok(v) if (min..=max).contains(&v) => ValidationResult::Valid(v),
        _ => ValidationResult::invalid(format!("{} must be between {} and {}", label, min, max)),
    }
}
