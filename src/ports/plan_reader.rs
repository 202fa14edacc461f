//! Plan reader port (read side).
//!
//! Plans are administered out of band, so the service only needs queries.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::plan::SubscriptionPlan;

/// Reader port for the plan catalog.
#[async_trait]
pub trait PlanReader: Send + Sync {
    /// All plans, ordered by identifier ascending.
    ///
    /// An empty catalog is a valid result.
    async fn list_plans(&self) -> Result<Vec<SubscriptionPlan>, DomainError>;

    /// A single plan by identifier, or `None` if it does not exist.
    async fn find_by_id(&self, id: PlanId) -> Result<Option<SubscriptionPlan>, DomainError>;
}
