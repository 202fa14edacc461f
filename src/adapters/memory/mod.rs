//! In-memory persistence adapters.
//!
//! `InMemoryStore` implements every persistence port over a single shared
//! table set, enforcing the same uniqueness and foreign-key rules as the
//! PostgreSQL schema. Used by unit and HTTP tests in place of a live database.
//!
//! # Example
//!
//! ```ignore
//! let store = Arc::new(
//!     InMemoryStore::new().with_plan(SubscriptionPlan::new(PlanId::new(1), "Basic", 9.99)?),
//! );
//! let plans: Arc<dyn PlanReader> = store.clone();
//! let users: Arc<dyn UserRepository> = store.clone();
//! ```

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, PlanId, SubscriptionId, UserId};
use crate::domain::plan::SubscriptionPlan;
use crate::domain::subscription::{NewSubscription, UserSubscription};
use crate::domain::user::{NewUser, User, Username};
use crate::ports::{PlanReader, SubscriptionRepository, UserRepository};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    plans: Vec<SubscriptionPlan>,
    subscriptions: Vec<UserSubscription>,
    next_user_id: i64,
    next_subscription_id: i64,
}

/// Shared in-memory tables behind the persistence ports.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a plan into the catalog. Plans are administered out of band.
    pub fn with_plan(mut self, plan: SubscriptionPlan) -> Self {
        let tables = self.tables.get_mut();
        tables.plans.retain(|p| p.id != plan.id);
        tables.plans.push(plan);
        tables.plans.sort_by_key(|p| p.id);
        self
    }

    /// Number of stored users.
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    /// All stored subscriptions, in insertion order.
    pub async fn subscriptions(&self) -> Vec<UserSubscription> {
        self.tables.read().await.subscriptions.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::duplicate_username());
        }

        tables.next_user_id += 1;
        let user = new_user.clone().into_user(UserId::new(tables.next_user_id));
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| &u.username == username).cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().any(|u| &u.username == username))
    }
}

#[async_trait]
impl PlanReader for InMemoryStore {
    async fn list_plans(&self) -> Result<Vec<SubscriptionPlan>, DomainError> {
        Ok(self.tables.read().await.plans.clone())
    }

    async fn find_by_id(&self, id: PlanId) -> Result<Option<SubscriptionPlan>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.plans.iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryStore {
    async fn create(
        &self,
        subscription: &NewSubscription,
    ) -> Result<UserSubscription, DomainError> {
        let mut tables = self.tables.write().await;

        if !tables.plans.iter().any(|p| p.id == subscription.plan_id) {
            return Err(DomainError::plan_not_found(subscription.plan_id));
        }
        if !tables.users.iter().any(|u| u.id == subscription.user_id) {
            return Err(DomainError::user_not_found(subscription.user_id));
        }

        tables.next_subscription_id += 1;
        let stored = subscription
            .clone()
            .into_subscription(SubscriptionId::new(tables.next_subscription_id));
        tables.subscriptions.push(stored.clone());
        Ok(stored)
    }
}
