//! Mock authentication adapters for testing.
//!
//! These adapters implement the `SessionValidator` and `TokenIssuer` ports
//! without any cryptography, so HTTP and handler tests can exercise the auth
//! paths deterministically.
//!
//! # Example
//!
//! ```ignore
//! use subscription_service::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new().with_user("valid-token", 1);
//!
//! let result = validator.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AccessToken, AuthError, AuthenticatedUser, UserId};
use crate::ports::{SessionValidator, TokenIssuer};

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: HashMap<String, AuthenticatedUser>,
    /// Error returned for every validation when set
    force_error: Option<AuthError>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to the given user id.
    pub fn with_user(mut self, token: impl Into<String>, user_id: i64) -> Self {
        self.tokens.insert(token.into(), AuthenticatedUser::new(UserId::new(user_id)));
        self
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.force_error = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }

        self.tokens.get(token).cloned().ok_or(AuthError::InvalidToken)
    }
}

/// Mock token issuer producing `mock-token-<user id>` strings.
#[derive(Debug, Default)]
pub struct MockTokenIssuer {
    force_error: Option<AuthError>,
}

impl MockTokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: AuthError) -> Self {
        Self {
            force_error: Some(error),
        }
    }
}

impl TokenIssuer for MockTokenIssuer {
    fn issue(&self, user_id: UserId) -> Result<AccessToken, AuthError> {
        match &self.force_error {
            Some(error) => Err(error.clone()),
            None => Ok(AccessToken::new(format!("mock-token-{}", user_id))),
        }
    }
}
