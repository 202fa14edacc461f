//! Authentication types for the domain layer.
//!
//! These types represent the caller identity carried by a bearer token.
//! They have **no external dependencies**: the token adapter populates
//! them via the `SessionValidator` port, and the credential adapter reports
//! hashing failures through `AuthError`.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after token validation:
//! let user = AuthenticatedUser::new(UserId::new(42));
//!
//! // Inject into request extensions for handlers to use
//! request.extensions_mut().insert(user);
//! ```

use std::fmt;

use super::UserId;
use thiserror::Error;

/// Authenticated caller extracted from a validated bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The user identifier taken from the token's subject claim.
    pub id: UserId,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// A signed, self-contained bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

// Tokens are credentials; keep them out of logs.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Authentication errors raised by the token and credential modules.
///
/// These errors are **domain-centric** - they describe what went wrong
/// from the application's perspective, not the crypto library's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is malformed, has a bad signature, or wrong issuer.
    #[error("Invalid token")]
    InvalidToken,

    /// The token signature is valid but it has expired.
    #[error("Token has expired")]
    TokenExpired,

    /// A token could not be signed.
    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    /// Password hashing or hash parsing failed.
    #[error("Credential hashing failed: {0}")]
    CredentialHashing(String),
}

impl AuthError {
    /// Returns true if this error indicates the caller should log in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_carries_subject() {
        let user = AuthenticatedUser::new(UserId::new(7));
        assert_eq!(user.id.as_i64(), 7);
    }

    #[test]
    fn access_token_debug_is_redacted() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiJ9.secret.sig");
        assert_eq!(format!("{:?}", token), "AccessToken(..)");
        assert_eq!(token.as_str(), "eyJhbGciOiJIUzI1NiJ9.secret.sig");
    }

    #[test]
    fn token_errors_require_reauthentication() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(!AuthError::CredentialHashing("oom".to_string()).requires_reauthentication());
    }

    #[test]
    fn auth_error_messages() {
        assert_eq!(AuthError::TokenExpired.to_string(), "Token has expired");
        assert_eq!(AuthError::InvalidToken.to_string(), "Invalid token");
    }
}
