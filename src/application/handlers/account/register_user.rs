//! RegisterUserHandler - Command handler for creating user accounts.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, UserId};
use crate::domain::user::{NewUser, UserError, Username};
use crate::ports::{PasswordHasher, UserRepository};

/// Command to register a new user.
///
/// Empty strings stand for absent fields.
#[derive(Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for RegisterUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserCommand")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user_id: UserId,
}

/// Handler for registering users.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<RegisterUserResult, UserError> {
        // 1. Both fields are required
        if cmd.username.is_empty() || cmd.password.is_empty() {
            return Err(UserError::missing_credentials());
        }

        let username = Username::try_new(cmd.username)
            .map_err(|e| UserError::validation(e.field().to_string(), e.to_string()))?;

        // 2. Reject known usernames before paying for a hash
        if self.users.exists_by_username(&username).await? {
            return Err(UserError::already_exists(username.as_str()));
        }

        // 3. Hash off the async reactor
        let hasher = Arc::clone(&self.hasher);
        let password = cmd.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::infrastructure(format!("Hashing task failed: {}", e)))??;

        // 4. Persist; a concurrent duplicate surfaces as a constraint violation
        let user = self
            .users
            .create(&NewUser::new(username.clone(), password_hash))
            .await
            .map_err(|e| match e.code {
                ErrorCode::DuplicateUsername => UserError::already_exists(username.as_str()),
                _ => e.into(),
            })?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(RegisterUserResult { user_id: user.id })
    }
}
