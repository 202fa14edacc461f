//! Access token settings.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Shortest accepted HS256 signing secret, in bytes.
pub const MIN_SECRET_BYTES: usize = 32;

/// HS256 signing secret, token lifetime and issuer.
///
/// The secret has no default and must come from the environment
/// (`SUBSCRIPTIONS__AUTH__JWT_SECRET`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: SecretString,
    pub token_ttl_secs: u64,
    /// `iss` claim written on issue and required on validation
    pub issuer: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            token_ttl_secs: 900,
            issuer: "subscription-service".into(),
        }
    }
}

impl AuthConfig {
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.jwt_secret.expose_secret().len() {
            0 => return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET")),
            n if n < MIN_SECRET_BYTES => {
                return Err(ValidationError::SecretTooShort(MIN_SECRET_BYTES))
            }
            _ => {}
        }
        if self.token_ttl_secs == 0 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        if self.issuer.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ISSUER"));
        }
        Ok(())
    }
}
