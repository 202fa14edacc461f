//! ListPlansHandler - Query handler for the plan catalog.

use std::sync::Arc;

use crate::domain::plan::SubscriptionPlan;
use crate::domain::subscription::SubscriptionError;
use crate::ports::PlanReader;

/// Query for every plan in the catalog.
#[derive(Debug, Clone, Default)]
pub struct ListPlansQuery;

/// Plans ordered by identifier ascending.
pub type ListPlansResult = Vec<SubscriptionPlan>;

pub struct ListPlansHandler {
    reader: Arc<dyn PlanReader>,
}

impl ListPlansHandler {
    pub fn new(reader: Arc<dyn PlanReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, _query: ListPlansQuery) -> Result<ListPlansResult, SubscriptionError> {
        Ok(self.reader.list_plans().await?)
    }
}
