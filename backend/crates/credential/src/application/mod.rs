//! Application Layer
//!
//! Configuration, token issuance/verification, inspection and secrets.

pub mod config;
pub mod inspect;
pub mod issuer;
pub mod lifetime;
pub mod secrets;

pub use config::CredentialConfig;
pub use issuer::TokenIssuer;
pub use lifetime::TokenLifetime;
