//! Error types shared by the domain and the ports.

use std::fmt;
use thiserror::Error;

use super::{PlanId, UserId};

/// A value failed its construction rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    EmptyField { field: String },

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("{field} {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field, .. } => field,
        }
    }
}

/// What kind of failure a port reported.
///
/// The constraint codes let handlers turn a database rejection into the
/// matching client error instead of a 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unique constraint on `users.username`
    DuplicateUsername,
    /// Foreign key to `users`
    UserNotFound,
    /// Foreign key to `subscription_plans`
    PlanNotFound,
    /// Anything else the store could not do
    DatabaseError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorCode::DuplicateUsername => "DUPLICATE_USERNAME",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::PlanNotFound => "PLAN_NOT_FOUND",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        })
    }
}

/// Failure returned by every port method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    pub fn duplicate_username() -> Self {
        Self::new(ErrorCode::DuplicateUsername, "Username already registered")
    }

    pub fn user_not_found(user_id: UserId) -> Self {
        Self::new(ErrorCode::UserNotFound, format!("User {} does not exist", user_id))
    }

    pub fn plan_not_found(plan_id: PlanId) -> Self {
        Self::new(ErrorCode::PlanNotFound, format!("Plan {} does not exist", plan_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        assert_eq!(
            ValidationError::empty_field("username").to_string(),
            "username is required"
        );
        assert_eq!(
            ValidationError::too_long("username", 100, 120).to_string(),
            "username must be at most 100 characters (got 120)"
        );
        assert_eq!(ValidationError::too_long("name", 50, 51).field(), "name");
    }

    #[test]
    fn domain_error_display_carries_code() {
        assert_eq!(
            DomainError::plan_not_found(PlanId::new(4)).to_string(),
            "[PLAN_NOT_FOUND] Plan 4 does not exist"
        );
        assert_eq!(
            DomainError::database("connection reset").code,
            ErrorCode::DatabaseError
        );
    }

    #[test]
    fn constraint_constructors_set_codes() {
        assert_eq!(DomainError::duplicate_username().code, ErrorCode::DuplicateUsername);
        assert_eq!(DomainError::user_not_found(UserId::new(1)).code, ErrorCode::UserNotFound);
    }
}
