//! HTTP adapter for plan and subscription endpoints.
//!
//! - `GET /plans` - List the plan catalog
//! - `POST /subscribe` - Subscribe the authenticated caller to a plan

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{PlanResponse, SubscribeRequest};
pub use handlers::{SubscriptionApiError, SubscriptionAppState};
pub use routes::subscription_routes;
