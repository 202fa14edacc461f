//! Account-specific error types.
//!
//! Errors raised while registering users and logging them in.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | ValidationFailed | 400 |
//! | AlreadyExists | 400 |
//! | InvalidCredentials | 401 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::{AuthError, DomainError};

/// Errors from the registration and login flows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// A required field is missing or malformed.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// The username is already registered.
    #[error("User '{0}' already exists")]
    AlreadyExists(String),

    /// Unknown username or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Storage, hashing or signing failure.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl UserError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        UserError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Both fields are required by register and login.
    pub fn missing_credentials() -> Self {
        Self::validation("username", "Username and password required")
    }

    pub fn already_exists(username: impl Into<String>) -> Self {
        UserError::AlreadyExists(username.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }

    /// Message safe to show to the client.
    pub fn message(&self) -> String {
        match self {
            UserError::ValidationFailed { message, .. } => message.clone(),
            UserError::AlreadyExists(_) => "User already exists".to_string(),
            UserError::InvalidCredentials => "Invalid credentials".to_string(),
            UserError::Infrastructure(_) => "Internal server error".to_string(),
        }
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        UserError::Infrastructure(err.to_string())
    }
}

impl From<AuthError> for UserError {
    fn from(err: AuthError) -> Self {
        UserError::Infrastructure(err.to_string())
    }
}
