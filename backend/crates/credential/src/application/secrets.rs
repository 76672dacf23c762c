//! Auxiliary Secrets
//!
//! Random tokens, API keys, refresh secrets and at-rest token hashes.
//! None of these depend on the signing secret.

use platform::crypto::{constant_time_eq, random_hex, sha256_hex};

/// Default byte length of [`random_token`]
pub const DEFAULT_RANDOM_TOKEN_BYTES: usize = 32;

/// Default prefix of [`api_key`]
pub const DEFAULT_API_KEY_PREFIX: &str = "sc";

/// Random bytes behind an API key (48 hex chars)
pub const API_KEY_BYTES: usize = 24;

/// Random bytes behind a refresh secret (80 hex chars)
pub const REFRESH_SECRET_BYTES: usize = 40;

/// `byte_len` CSPRNG bytes, hex encoded (`2 * byte_len` chars)
pub fn random_token(byte_len: usize) -> String {
    random_hex(byte_len)
}

/// `{prefix}_{48 hex chars}`
pub fn api_key(prefix: &str) -> String {
    format!("{}_{}", prefix, random_hex(API_KEY_BYTES))
}

/// Opaque secret exchanged for a new session token
pub fn refresh_secret() -> String {
    random_hex(REFRESH_SECRET_BYTES)
}

/// One-way SHA-256 digest, lowercase hex
///
/// Persist this instead of the raw token.
pub fn hash_for_storage(token: &str) -> String {
    sha256_hex(token.as_bytes())
}

/// Compare a presented token against a hash produced by [`hash_for_storage`]
pub fn matches_stored_hash(token: &str, stored_hash: &str) -> bool {
    let computed = hash_for_storage(token);
    constant_time_eq(
        computed.as_bytes(),
        stored_hash.trim().to_ascii_lowercase().as_bytes(),
    )
}
