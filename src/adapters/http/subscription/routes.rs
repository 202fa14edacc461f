//! Axum router configuration for plan and subscription endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::{auth_middleware, AuthState};

use super::handlers::{list_plans, subscribe, SubscriptionAppState};

/// Create the plan and subscription router.
///
/// # Routes
/// - `GET /plans` - Public plan catalog
/// - `POST /subscribe` - Requires a bearer token
///
/// Token validation is attached to `/subscribe` only, so a stale token sent
/// to `/plans` is simply ignored.
pub fn subscription_routes(validator: AuthState) -> Router<SubscriptionAppState> {
    Router::new().route("/plans", get(list_plans)).route(
        "/subscribe",
        post(subscribe).layer(middleware::from_fn_with_state(validator, auth_middleware)),
    )
}
