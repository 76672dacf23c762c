//! Validation Report
//!
//! Collects per-field results for a whole submission and converts the
//! failures into a single 400 response.

use std::borrow::Cow;

use kernel::{AppError, AppResult, FieldViolation};

use crate::result::ValidationResult;

#[derive(Debug, Default)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` under `field`, returning the clean value on success
    pub fn check<T>(
        &mut self,
        field: impl Into<Cow<'static, str>>,
        result: ValidationResult<T>,
    ) -> Option<T> {
        match result {
            ValidationResult::Valid(value) => Some(value),
            ValidationResult::Invalid(message) => {
                self.violations.push(FieldViolation::new(field, message));
                None
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// `Ok(())` when every field passed
    pub fn finish(self) -> AppResult<()> {
        if self.violations.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            fields = ?self.violations.iter().map(|v| v.field.as_ref()).collect::<Vec<_>>(),
            "Validation failed"
        );

        let message = match self.violations.as_slice() {
            [only] => only.message.clone(),
            _ => "Validation failed".to_string(),
        };

        Err(AppError::bad_request(message)
            .with_action("Correct the highlighted fields and try again")
            .with_violations(self.violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::ErrorKind;

    #[test]
    fn test_all_valid() {
        let mut report = ValidationReport::new();
        let roll = report.check("rollNumber", ValidationResult::Valid("CS101".to_string()));
        assert_eq!(roll.as_deref(), Some("CS101"));
        assert!(report.is_valid());
        assert!(report.finish().is_ok());
    }

    #[test]
    fn test_single_failure_uses_its_message() {
        let mut report = ValidationReport::new();
        report.check("email", ValidationResult::<()>::invalid("Email is required"));

        let err = report.finish().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.message(), "Email is required");
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn test_multiple_failures_in_order() {
        let mut report = ValidationReport::new();
        report.check("email", ValidationResult::<()>::invalid("Email is required"));
        report.check("name", ValidationResult::Valid("Ada".to_string()));
        report.check("password", ValidationResult::<()>::invalid("Password is required"));

        assert!(!report.is_valid());
        let err = report.finish().unwrap_err();
        assert_eq!(err.message(), "Validation failed");

        let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_ref()).collect();
        assert_eq!(fields, ["email", "password"]);
    }
}
