//! Token issuing port.
//!
//! The counterpart of `SessionValidator`: one signs bearer tokens at login,
//! the other verifies them on protected requests.

use crate::domain::foundation::{AccessToken, AuthError, UserId};

/// Issues signed bearer tokens whose subject is a user identifier.
pub trait TokenIssuer: Send + Sync {
    /// Sign a token for `user_id` using the issuer's default lifetime.
    ///
    /// # Errors
    ///
    /// `AuthError::TokenIssuance` if signing fails.
    fn issue(&self, user_id: UserId) -> Result<AccessToken, AuthError>;
}
