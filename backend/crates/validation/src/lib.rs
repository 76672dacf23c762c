//! Field Validation
//!
//! Pure checks for user-submitted form fields. Each validator returns a
//! [`ValidationResult`]; normalizing validators carry the cleaned value.
//! [`ValidationReport`] folds several results into one `kernel::AppError`.

pub mod field;
pub mod report;
pub mod result;
pub mod sanitize;


pub use field::{
    academic::{validate_academic_year, validate_semester},
    email::validate_email,
    file::{DEFAULT_MAX_FILE_SIZE, validate_file_size, validate_file_type},
    name::validate_name,
    object_id::validate_object_id,
    password::validate_password,
    phone_number::validate_phone_number,
    roll_number::validate_roll_number,
    text::{TextRules, validate_text},
    url::validate_url,
};
pub use report::ValidationReport;
pub use result::{CleanValue, ValidationResult};
pub use sanitize::sanitize_html;
