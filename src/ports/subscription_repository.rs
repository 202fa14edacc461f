//! Subscription repository port (write side).
//!
//! # Design
//!
//! - **No deduplication**: every `create` inserts a new row, even for a
//!   user/plan pair that already has an active subscription
//! - **Referential integrity**: a dangling `plan_id` is reported as
//!   `ErrorCode::PlanNotFound`, a dangling `user_id` as `ErrorCode::UserNotFound`

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::subscription::{NewSubscription, UserSubscription};

/// Repository port for user subscriptions.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Insert a subscription and return it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if the plan does not exist
    /// - `UserNotFound` if the user does not exist
    /// - `DatabaseError` on persistence failure
    async fn create(&self, subscription: &NewSubscription)
        -> Result<UserSubscription, DomainError>;
}
