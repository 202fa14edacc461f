//! SubscribeToPlanHandler - Command handler for subscribing a user to a plan.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::foundation::{ErrorCode, PlanId, UserId};
use crate::domain::subscription::{NewSubscription, SubscriptionError, UserSubscription};
use crate::ports::{PlanReader, SubscriptionRepository};

/// Command to subscribe the authenticated user to a plan.
#[derive(Debug, Clone)]
pub struct SubscribeToPlanCommand {
    pub user_id: UserId,
    /// `None` when the request omitted `plan_id`.
    pub plan_id: Option<PlanId>,
}

#[derive(Debug, Clone)]
pub struct SubscribeToPlanResult {
    pub subscription: UserSubscription,
}

/// Handler for creating subscriptions.
///
/// Not idempotent: every call inserts a new subscription.
pub struct SubscribeToPlanHandler {
    plans: Arc<dyn PlanReader>,
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl SubscribeToPlanHandler {
    pub fn new(
        plans: Arc<dyn PlanReader>,
        subscriptions: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            plans,
            subscriptions,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubscribeToPlanCommand,
    ) -> Result<SubscribeToPlanResult, SubscriptionError> {
        let plan_id = cmd.plan_id.ok_or_else(SubscriptionError::missing_plan_id)?;

        let plan = self
            .plans
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| SubscriptionError::plan_not_found(plan_id))?;

        let new_subscription =
            NewSubscription::starting(cmd.user_id, plan.id, Utc::now().date_naive());

        let subscription = self
            .subscriptions
            .create(&new_subscription)
            .await
            .map_err(|e| match e.code {
                ErrorCode::PlanNotFound => SubscriptionError::plan_not_found(plan_id),
                ErrorCode::UserNotFound => SubscriptionError::UnknownUser(cmd.user_id),
                _ => e.into(),
            })?;

        tracing::info!(
            user_id = %subscription.user_id,
            plan_id = %subscription.plan_id,
            subscription_id = %subscription.id,
            free_plan = plan.is_free(),
            "Subscription created"
        );

        Ok(SubscribeToPlanResult { subscription })
    }
}
