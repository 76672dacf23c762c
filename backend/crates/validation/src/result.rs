//! Validation Result
//!
//! Outcome of checking one field. A failure always carries a message and
//! a success never does; the enum makes any other combination unrepresentable.

use serde::ser::{Serialize, SerializeStruct, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult<T = ()> {
    /// Passed, with the normalized value (`()` when nothing is normalized)
    Valid(T),
    /// Failed, with a user-facing message
    Invalid(String),
}

impl<T> ValidationResult<T> {
    #[inline]
    pub fn invalid(message: impl Into<String>) -> Self {
        ValidationResult::Invalid(message.into())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(message) => Some(message),
        }
    }

    pub fn clean_value(&self) -> Option<&T> {
        match self {
            ValidationResult::Valid(value) => Some(value),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            ValidationResult::Valid(value) => Ok(value),
            ValidationResult::Invalid(message) => Err(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationResult<U> {
        match self {
            ValidationResult::Valid(value) => ValidationResult::Valid(f(value)),
            ValidationResult::Invalid(message) => ValidationResult::Invalid(message),
        }
    }
}

impl ValidationResult<()> {
    #[inline]
    pub fn ok() -> Self {
        ValidationResult::Valid(())
    }
}

/// Values that appear as `cleanValue` in serialized results
///
/// `()` is excluded so non-normalizing validators serialize without it.
pub trait CleanValue: Serialize {
    const PRESENT: bool = true;
}

impl CleanValue for () {
    const PRESENT: bool = false;
}
impl CleanValue for String {}
impl CleanValue for u8 {}
impl<T: CleanValue> CleanValue for Option<T> {}

/// Serialized as `{isValid, message?, cleanValue?}`
impl<T: CleanValue> Serialize for ValidationResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidationResult::Valid(value) if T::PRESENT => {
                let mut state = serializer.serialize_struct("ValidationResult", 2)?;
                state.serialize_field("isValid", &true)?;
                state.serialize_field("cleanValue", value)?;
                state.end()
            }
            ValidationResult::Valid(_) => {
                let mut state = serializer.serialize_struct("ValidationResult", 1)?;
                state.serialize_field("isValid", &true)?;
                state.end()
            }
            ValidationResult::Invalid(message) => {
                let mut state = serializer.serialize_struct("ValidationResult", 2)?;
                state.serialize_field("isValid", &false)?;
                state.serialize_field("message", message)?;
                state.end()
            }
        }
    }
}
