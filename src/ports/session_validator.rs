//! Bearer token validation port.
//!
//! The `/subscribe` middleware depends on this trait rather than on JWT
//! directly. Implementations check the signature, issuer and expiry before
//! trusting the subject.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Turns a raw bearer token into the caller it was issued to.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the header value with the `Bearer ` prefix removed.
    ///
    /// # Errors
    ///
    /// - `AuthError::TokenExpired` when the signature is good but `exp` has passed
    /// - `AuthError::InvalidToken` for anything else that fails to verify,
    ///   including a subject that is not a user id
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use std::sync::Arc;

    /// Accepts tokens of the form `user:<id>`.
    struct PrefixValidator;

    #[async_trait]
    impl SessionValidator for PrefixValidator {
        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            token
                .strip_prefix("user:")
                .and_then(|id| id.parse::<UserId>().ok())
                .map(AuthenticatedUser::new)
                .ok_or(AuthError::InvalidToken)
        }
    }

    #[tokio::test]
    async fn usable_as_shared_trait_object() {
        let validator: Arc<dyn SessionValidator> = Arc::new(PrefixValidator);

        let user = validator.validate("user:5").await.unwrap();
        assert_eq!(user.id, UserId::new(5));

        assert_eq!(
            validator.validate("admin:5").await,
            Err(AuthError::InvalidToken)
        );
    }
}
