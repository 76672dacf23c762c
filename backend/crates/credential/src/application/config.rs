//! Credential Configuration
//!
//! Process-wide settings for token issuance. Read-only once built.

use std::fmt;
use zeroize::Zeroizing;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;
use platform::cookie::CookieConfig;

use crate::application::lifetime::TokenLifetime;
use crate::application::secrets::DEFAULT_API_KEY_PREFIX;
use crate::error::{CredentialError, CredentialResult};

/// Environment variable names read by [`CredentialConfig::from_env`]
pub mod env_keys {
    pub const SIGNING_SECRET: &str = "JWT_SECRET";
    pub const TOKEN_LIFETIME: &str = "JWT_EXPIRE";
    pub const API_KEY_PREFIX: &str = "API_KEY_PREFIX";
    pub const COOKIE_NAME: &str = "TOKEN_COOKIE_NAME";
    pub const COOKIE_SECURE: &str = "COOKIE_SECURE";
}

#[derive(Clone)]
pub struct CredentialConfig {
    /// HMAC signing secret. `None` makes issuance and verification fail.
    pub signing_secret: Option<Zeroizing<Vec<u8>>>,
    /// Lifetime applied when the caller passes no ttl
    pub default_lifetime: TokenLifetime,
    /// Prefix for generated API keys
    pub api_key_prefix: String,
    /// Cookie the token is read from and written to
    pub cookie_name: String,
    pub cookie_secure: bool,
    pub cookie_same_site: SameSite,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            signing_secret: None,
            default_lifetime: TokenLifetime::default(),
            api_key_prefix: DEFAULT_API_KEY_PREFIX.to_string(),
            cookie_name: "token".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl CredentialConfig {
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            signing_secret: Some(Zeroizing::new(secret.into())),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::default().or_random_secret()
        }
    }

    /// Fill in a random signing secret when none is configured
    ///
    /// Every other setting is left as loaded. Tokens signed with a random
    /// secret stop verifying when the process restarts.
    pub fn or_random_secret(mut self) -> Self {
        if !self.has_secret() {
            self.signing_secret = Some(Zeroizing::new(platform::crypto::random_bytes(32)));
        }
        self
    }

    /// Load from process environment
    pub fn from_env() -> CredentialResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key/value source
    pub fn from_lookup<F>(lookup: F) -> CredentialResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match lookup(env_keys::SIGNING_SECRET).filter(|s| !s.is_empty()) {
            Some(secret) => config.signing_secret = Some(Zeroizing::new(secret.into_bytes())),
            None => tracing::warn!(
                key = env_keys::SIGNING_SECRET,
                "Signing secret not set; token issuance will fail"
            ),
        }

        if let Some(raw) = lookup(env_keys::TOKEN_LIFETIME).filter(|s| !s.trim().is_empty()) {
            config.default_lifetime = TokenLifetime::parse(&raw).map_err(|e| {
                CredentialError::Config(format!("{}: {}", env_keys::TOKEN_LIFETIME, e))
            })?;
        }

        if let Some(prefix) = lookup(env_keys::API_KEY_PREFIX).filter(|s| !s.trim().is_empty()) {
            config.api_key_prefix = prefix.trim().to_string();
        }

        if let Some(name) = lookup(env_keys::COOKIE_NAME).filter(|s| !s.trim().is_empty()) {
            config.cookie_name = name.trim().to_string();
        }

        if let Some(raw) = lookup(env_keys::COOKIE_SECURE) {
            config.cookie_secure = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => {
                    return Err(CredentialError::Config(format!(
                        "{}: expected a boolean, got '{}'",
                        env_keys::COOKIE_SECURE,
                        other
                    )));
                }
            };
        }

        tracing::debug!(
            lifetime = %config.default_lifetime,
            cookie = %config.cookie_name,
            "Credential configuration loaded"
        );

        Ok(config)
    }

    /// Signing secret, or `Config` error when absent
    pub fn secret(&self) -> CredentialResult<&[u8]> {
        match self.signing_secret.as_deref() {
            Some(secret) if !secret.is_empty() => Ok(secret.as_slice()),
            _ => Err(CredentialError::Config(
                "signing secret is not configured".to_string(),
            )),
        }
    }

    pub fn has_secret(&self) -> bool {
        self.secret().is_ok()
    }

    /// Cookie attributes for the token cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            max_age_secs: Some(self.default_lifetime.num_seconds()),
            ..CookieConfig::default()
        }
    }
}

impl fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialConfig")
            .field(
                "signing_secret",
                &self.signing_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("default_lifetime", &self.default_lifetime)
            .field("api_key_prefix", &self.api_key_prefix)
            .field("cookie_name", &self.cookie_name)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .finish()
    }
}
