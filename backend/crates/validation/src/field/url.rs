//! URL Validator
//!
//! Accepts absolute `http` and `https` URLs. Other schemes are rejected
//! with their own message.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::result::ValidationResult;

static SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.-]*):").unwrap());

/// Host (dotted labels or bracketed IPv6), optional port, then path, query or fragment
static HTTP_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^https?://(?:[^\s/?#@]+@)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*|\[[0-9a-f:.]+\])(?::\d{1,5})?(?:[/?#]\S*)?$",
    )
    .unwrap()
});

/// Empty input passes unless `required`
pub fn validate_url(raw: &str, required: bool) -> ValidationResult {
    let url = raw.trim();
    if url.is_empty() {
        return if required {
            ValidationResult::invalid("URL is required")
        } else {
            ValidationResult::ok()
        };
    }

    match SCHEME_RE.captures(url).and_then(|c| c.get(1)) {
        Some(scheme)
            if scheme.as_str().eq_ignore_ascii_case("http")
                || scheme.as_str().eq_ignore_ascii_case("https") => {}
        Some(_) => return ValidationResult::invalid("URL must use http or https"),
        None => return ValidationResult::invalid("Please provide a valid URL"),
    }

    if !HTTP_URL_RE.is_match(url) {
        return ValidationResult::invalid("Please provide a valid URL");
    }

    ValidationResult::ok()
}
