//! UserSubscription entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlanId, SubscriptionId, UserId};

/// A persisted link between a user and a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSubscription {
    pub id: SubscriptionId,
    pub user_id: UserId,
    pub plan_id: PlanId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

/// A subscription that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscription {
    pub user_id: UserId,
    pub plan_id: PlanId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

impl NewSubscription {
    /// An open-ended, active subscription beginning on `start_date`.
    pub fn starting(user_id: UserId, plan_id: PlanId, start_date: NaiveDate) -> Self {
        Self {
            user_id,
            plan_id,
            start_date,
            end_date: None,
            active: true,
        }
    }

    /// Attaches the identifier assigned by the store.
    pub fn into_subscription(self, id: SubscriptionId) -> UserSubscription {
        UserSubscription {
            id,
            user_id: self.user_id,
            plan_id: self.plan_id,
            start_date: self.start_date,
            end_date: self.end_date,
            active: self.active,
        }
    }
}
