//! Top-level router composition.
//!
//! Merges the account and subscription routers behind a shared state and
//! wraps them in the server-wide layers (timeout, tracing, CORS).

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::middleware::map_response;
use axum::response::Response;
use axum::{routing::get, Json, Router};
use http::HeaderValue;
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::ports::{
    PasswordHasher, PlanReader, SessionValidator, SubscriptionRepository, TokenIssuer,
    UserRepository,
};

use super::account::{account_routes, AccountAppState};
use super::response::message;
use super::subscription::{subscription_routes, SubscriptionAppState};

/// Every adapter the HTTP surface depends on.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub plans: Arc<dyn PlanReader>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub session_validator: Arc<dyn SessionValidator>,
}

impl AppState {
    pub fn account_state(&self) -> AccountAppState {
        AccountAppState {
            users: self.users.clone(),
            password_hasher: self.password_hasher.clone(),
            token_issuer: self.token_issuer.clone(),
        }
    }

    pub fn subscription_state(&self) -> SubscriptionAppState {
        SubscriptionAppState {
            plans: self.plans.clone(),
            subscriptions: self.subscriptions.clone(),
        }
    }
}

/// Router with every endpoint and no server-wide layers.
///
/// Tests drive this directly with `oneshot`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(account_routes().with_state(state.account_state()))
        .merge(
            subscription_routes(state.session_validator.clone())
                .with_state(state.subscription_state()),
        )
}

/// Router wrapped in the layers configured for `server`.
pub fn build_app(state: AppState, server: &ServerConfig) -> Router {
    let router = with_timeout(app_router(state), server.request_timeout())
        .layer(TraceLayer::new_for_http());

    match cors_layer(&server.cors_origins_list()) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// Abort requests after `timeout`, answering 408 with a `{"msg": ...}` body.
fn with_timeout(router: Router, timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::new(timeout))
        .layer(map_response(timeout_message))
}

// TimeoutLayer answers with an empty body; no handler returns 408 itself.
async fn timeout_message(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        message(StatusCode::REQUEST_TIMEOUT, "Request timed out")
    } else {
        response
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|origin| origin == "*") {
        return Some(base.allow_origin(Any));
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    Some(base.allow_origin(AllowOrigin::list(allowed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn slow_router() -> Router {
        Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .route("/fast", get(|| async { "on time" }))
    }

    async fn call(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn timed_out_request_gets_a_msg_body() {
        let (status, body) =
            call(with_timeout(slow_router(), Duration::from_millis(20)), "/slow").await;

        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"msg": "Request timed out"}));
    }

    #[tokio::test]
    async fn responses_within_the_deadline_pass_through() {
        let (status, body) =
            call(with_timeout(slow_router(), Duration::from_secs(5)), "/fast").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"on time");
    }

    #[test]
    fn no_origins_means_no_cors_layer() {
        assert!(cors_layer(&[]).is_none());
    }

    #[test]
    fn wildcard_and_explicit_origins_build_a_layer() {
        assert!(cors_layer(&["*".to_string()]).is_some());
        assert!(cors_layer(&["https://app.example.com".to_string()]).is_some());
    }
}
