//! Subscription-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | ValidationFailed | 400 |
//! | UnknownUser | 401 |
//! | PlanNotFound | 404 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, PlanId, UserId};

/// Errors from listing plans and subscribing to them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    /// A required field is missing or malformed.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// The requested plan does not exist.
    #[error("Plan {0} not found")]
    PlanNotFound(PlanId),

    /// The token subject no longer refers to a stored user.
    #[error("User {0} not found")]
    UnknownUser(UserId),

    /// Storage failure.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl SubscriptionError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SubscriptionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing_plan_id() -> Self {
        Self::validation("plan_id", "Plan ID is required")
    }

    pub fn plan_not_found(plan_id: PlanId) -> Self {
        SubscriptionError::PlanNotFound(plan_id)
    }

    /// Message safe to show to the client.
    pub fn message(&self) -> String {
        match self {
            SubscriptionError::ValidationFailed { message, .. } => message.clone(),
            SubscriptionError::PlanNotFound(_) => "Plan not found".to_string(),
            SubscriptionError::UnknownUser(_) => "User not found".to_string(),
            SubscriptionError::Infrastructure(_) => "Internal server error".to_string(),
        }
    }
}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        SubscriptionError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_match_api_contract() {
        assert_eq!(SubscriptionError::missing_plan_id().message(), "Plan ID is required");
        assert_eq!(
            SubscriptionError::plan_not_found(PlanId::new(99)).message(),
            "Plan not found"
        );
    }

    #[test]
    fn display_includes_identifier_for_logs() {
        let err = SubscriptionError::plan_not_found(PlanId::new(99));
        assert_eq!(err.to_string(), "Plan 99 not found");
    }

    #[test]
    fn domain_error_becomes_infrastructure() {
        let err: SubscriptionError = DomainError::database("deadlock detected").into();
        assert!(matches!(err, SubscriptionError::Infrastructure(_)));
        assert_eq!(err.message(), "Internal server error");
    }
}
