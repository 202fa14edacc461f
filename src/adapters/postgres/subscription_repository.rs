//! PostgreSQL implementation of SubscriptionRepository.
//!
//! Foreign-key violations on insert are translated into not-found domain
//! errors, so a plan deleted between lookup and insert still surfaces as
//! `PlanNotFound`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, SubscriptionId};
use crate::domain::subscription::{NewSubscription, UserSubscription};
use crate::ports::SubscriptionRepository;

const PLAN_FK: &str = "user_subscriptions_plan_id_fkey";
const USER_FK: &str = "user_subscriptions_user_id_fkey";

pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(e: sqlx::Error, subscription: &NewSubscription) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        match db_err.constraint() {
            Some(PLAN_FK) => return DomainError::plan_not_found(subscription.plan_id),
            Some(USER_FK) => return DomainError::user_not_found(subscription.user_id),
            _ => {}
        }
    }
    DomainError::database(format!("Failed to create subscription: {}", e))
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn create(
        &self,
        subscription: &NewSubscription,
    ) -> Result<UserSubscription, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO user_subscriptions (user_id, plan_id, start_date, end_date, active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(subscription.user_id.as_i64())
        .bind(subscription.plan_id.as_i64())
        .bind(subscription.start_date)
        .bind(subscription.end_date)
        .bind(subscription.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, subscription))?;

        Ok(subscription.clone().into_subscription(SubscriptionId::new(id)))
    }
}
