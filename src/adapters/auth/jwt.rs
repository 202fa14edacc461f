//! HS256 JWT adapter for issuing and validating access tokens.
//!
//! A single `JwtTokenService` implements both `TokenIssuer` (used by login)
//! and `SessionValidator` (used by the auth middleware), so signing and
//! verification always agree on key, issuer and algorithm.
//!
//! # Claims
//!
//! | Claim | Meaning |
//! |-------|---------|
//! | `sub` | User identifier as a decimal string |
//! | `iss` | Configured issuer |
//! | `iat` | Issued-at, Unix seconds |
//! | `exp` | Expiry, Unix seconds |
//!
//! # Security
//!
//! Validation checks the signature, `exp` and `iss`, and requires `sub`.
//! Tokens are never logged.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AccessToken, AuthError, AuthenticatedUser, UserId};
use crate::ports::{SessionValidator, TokenIssuer};

/// JWT claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iss: String,
    iat: i64,
    exp: i64,
}

/// Signs and verifies HS256 access tokens with a shared secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    ttl_secs: i64,
}

impl JwtTokenService {
    /// Create a service from a raw secret, issuer and token lifetime.
    pub fn new(secret: &[u8], issuer: impl Into<String>, ttl: Duration) -> Self {
        let issuer = issuer.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer,
            ttl_secs: i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX),
        }
    }

    /// Create a service from application configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.jwt_secret.expose_secret().as_bytes(),
            config.issuer.clone(),
            config.token_ttl(),
        )
    }

    /// Sign a token as if it had been issued at `issued_at`.
    pub fn issue_at(
        &self,
        user_id: UserId,
        issued_at: DateTime<Utc>,
    ) -> Result<AccessToken, AuthError> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iss: self.issuer.clone(),
            iat,
            exp: iat.saturating_add(self.ttl_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map(AccessToken::new)
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, user_id: UserId) -> Result<AccessToken, AuthError> {
        self.issue_at(user_id, Utc::now())
    }
}

#[async_trait]
impl SessionValidator for JwtTokenService {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                other => {
                    tracing::debug!(reason = ?other, "Rejected access token");
                    AuthError::InvalidToken
                }
            }
        })?;

        let user_id = data
            .claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthenticatedUser::new(user_id))
    }
}
