//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, authentication types and error types that form
//! the vocabulary of the subscription domain.

mod auth;
mod errors;
mod ids;

pub use auth::{AccessToken, AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PlanId, SubscriptionId, UserId};
