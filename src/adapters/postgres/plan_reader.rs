//! PostgreSQL implementation of PlanReader.
//!
//! Stored rows are returned as they are. The table's `CHECK` constraints
//! hold the catalog to the same rules as `SubscriptionPlan::new`, and a
//! listing never fails because of one row's contents.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::plan::SubscriptionPlan;
use crate::ports::PlanReader;

pub struct PostgresPlanReader {
    pool: PgPool,
}

impl PostgresPlanReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PlanRow {
    id: i64,
    name: String,
    price: f64,
}

impl From<PlanRow> for SubscriptionPlan {
    fn from(row: PlanRow) -> Self {
        SubscriptionPlan {
            id: PlanId::new(row.id),
            name: row.name,
            price: row.price,
        }
    }
}

#[async_trait]
impl PlanReader for PostgresPlanReader {
    async fn list_plans(&self) -> Result<Vec<SubscriptionPlan>, DomainError> {
        let rows: Vec<PlanRow> = sqlx::query_as(
            r#"
            SELECT id, name, price
            FROM subscription_plans
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list plans: {}", e)))?;

        Ok(rows.into_iter().map(SubscriptionPlan::from).collect())
    }

    async fn find_by_id(&self, id: PlanId) -> Result<Option<SubscriptionPlan>, DomainError> {
        let row: Option<PlanRow> = sqlx::query_as(
            r#"
            SELECT id, name, price
            FROM subscription_plans
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find plan: {}", e)))?;

        Ok(row.map(SubscriptionPlan::from))
    }
}
