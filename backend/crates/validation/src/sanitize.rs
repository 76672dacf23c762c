//! HTML Sanitization
//!
//! Pattern-based stripping of the most common script injection vectors:
//! - `<script>` elements with their content
//! - quoted inline event handler attributes (`onclick="..."`)
//! - the `javascript:` scheme
//!
//! This is a denylist. It does not parse HTML and will not catch unclosed
//! script tags, unquoted handlers, or encoded payloads. Escape on output.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());

static EVENT_HANDLER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\s*\bon[a-z]+\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap()
});

static JS_SCHEME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)javascript\s*:").unwrap());

pub fn sanitize_html(input: &str) -> String {
    let text = SCRIPT_RE.replace_all(input, "");
    let text = EVENT_HANDLER_RE.replace_all(&text, "");
    let text = JS_SCHEME_RE.replace_all(&text, "");

    let clean = text.trim();
    if clean.len() != input.len() {
        tracing::trace!(removed = input.len() - clean.len(), "Sanitized text input");
    }
    clean.to_string()
}
