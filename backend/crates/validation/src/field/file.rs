//! Upload Validators
//!
//! File type by extension and file size against a byte limit.

use crate::result::ValidationResult;

/// Default upload limit (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Accepts the name when its extension, compared case-insensitively, is
/// in `allowed`. Entries may be written with or without the leading dot.
pub fn validate_file_type(filename: &str, allowed: &[&str]) -> ValidationResult {
    let filename = filename.trim();
    if filename.is_empty() {
        return ValidationResult::invalid("File name is required");
    }

    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty());

    let accepted = extension.is_some_and(|ext| {
        allowed
            .iter()
            .any(|a| a.trim().trim_start_matches('.').eq_ignore_ascii_case(&ext))
    });

    if !accepted {
        let listed: Vec<&str> = allowed
            .iter()
            .map(|a| a.trim().trim_start_matches('.'))
            .collect();
        return ValidationResult::invalid(format!(
            "Invalid file type. Allowed types: {}",
            listed.join(", ")
        ));
    }

    ValidationResult::ok()
}

/// `size_bytes` may equal `max_bytes`
pub fn validate_file_size(size_bytes: u64, max_bytes: u64) -> ValidationResult {
    if size_bytes > max_bytes {
        return ValidationResult::invalid(format!(
            "File size must not exceed {}MB",
            format_megabytes(max_bytes)
        ));
    }
    ValidationResult::ok()
}

/// Two decimals at most, trailing zeros dropped
fn format_megabytes(bytes: u64) -> String {
    let mb = (bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0;
    format!("{}", mb)
}
