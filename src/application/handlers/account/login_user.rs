//! LoginUserHandler - Verifies credentials and issues an access token.

use std::sync::Arc;

use crate::domain::foundation::{AccessToken, UserId};
use crate::domain::user::{UserError, Username};
use crate::ports::{PasswordHasher, TokenIssuer, UserRepository};

/// Command to log a user in.
#[derive(Clone)]
pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginUserCommand")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginUserResult {
    pub user_id: UserId,
    pub access_token: AccessToken,
}

pub struct LoginUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl LoginUserHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, cmd: LoginUserCommand) -> Result<LoginUserResult, UserError> {
        if cmd.username.is_empty() || cmd.password.is_empty() {
            return Err(UserError::missing_credentials());
        }

        // A name that could never have been registered is just an unknown user
        let username = Username::try_new(cmd.username).map_err(|_| UserError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_username(&username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let hasher = Arc::clone(&self.hasher);
        let password = cmd.password;
        let stored_hash = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| UserError::infrastructure(format!("Verification task failed: {}", e)))??;

        if !verified {
            tracing::info!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(user.id)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginUserResult {
            user_id: user.id,
            access_token,
        })
    }
}
