//! End-to-end tests for the REST API.
//!
//! These tests drive the full router with in-memory persistence, the real
//! Argon2 hasher (at its lowest cost) and the real JWT service:
//! 1. Registration and login flows
//! 2. Plan listing
//! 3. Subscribing with and without a valid bearer token

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use subscription_service::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use subscription_service::adapters::http::{app_router, AppState};
use subscription_service::adapters::memory::InMemoryStore;
use subscription_service::domain::foundation::{PlanId, UserId};
use subscription_service::domain::plan::SubscriptionPlan;
use subscription_service::ports::TokenIssuer;

// =============================================================================
// Test Infrastructure
// =============================================================================

const SECRET: &[u8] = b"integration-test-secret-at-least-32-bytes";
const ISSUER: &str = "subscription-service";

struct TestApp {
    router: Router,
    store: Arc<InMemoryStore>,
    tokens: Arc<JwtTokenService>,
}

fn token_service() -> JwtTokenService {
    JwtTokenService::new(SECRET, ISSUER, Duration::from_secs(900))
}

fn test_app() -> TestApp {
    let store = Arc::new(
        InMemoryStore::new()
            .with_plan(SubscriptionPlan::new(PlanId::new(1), "plan1", 0.0).unwrap())
            .with_plan(SubscriptionPlan::new(PlanId::new(2), "Plan2", 10.0).unwrap()),
    );
    let tokens = Arc::new(token_service());

    let state = AppState {
        users: store.clone(),
        plans: store.clone(),
        subscriptions: store.clone(),
        password_hasher: Arc::new(Argon2PasswordHasher::low_cost()),
        token_issuer: tokens.clone(),
        session_validator: tokens.clone(),
    };

    TestApp {
        router: app_router(state),
        store,
        tokens,
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn register(app: &TestApp, username: &str, password: &str) -> (StatusCode, Value) {
    send(
        &app.router,
        post_json("/register", json!({"username": username, "password": password}), None),
    )
    .await
}

async fn login(app: &TestApp, username: &str, password: &str) -> (StatusCode, Value) {
    send(
        &app.router,
        post_json("/login", json!({"username": username, "password": password}), None),
    )
    .await
}

async fn registered_token(app: &TestApp, username: &str) -> String {
    register(app, username, "pw1").await;
    let (_, body) = login(app, username, "pw1").await;
    body["access_token"].as_str().unwrap().to_string()
}

// =============================================================================
// Full Scenario
// =============================================================================

#[tokio::test]
async fn register_login_list_and_subscribe_twice() {
    let app = test_app();

    let (status, body) = register(&app, "alice", "pw1").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"msg": "User registered successfully"}));

    let (status, body) = register(&app, "alice", "pw2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"msg": "User already exists"}));

    let (status, body) = login(&app, "alice", "pw1").await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().unwrap().to_string();
    assert!(!token.is_empty());

    let (status, plans) = send(&app.router, get("/plans")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(plans
        .as_array()
        .unwrap()
        .iter()
        .any(|plan| plan["id"] == json!(1)));

    for _ in 0..2 {
        let (status, body) =
            send(&app.router, post_json("/subscribe", json!({"plan_id": 1}), Some(&token))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"msg": "Subscription created successfully"}));
    }

    let subscriptions = app.store.subscriptions().await;
    assert_eq!(subscriptions.len(), 2);
    assert_ne!(subscriptions[0].id, subscriptions[1].id);
    assert!(subscriptions.iter().all(|s| s.plan_id == PlanId::new(1)));
    assert!(subscriptions.iter().all(|s| s.active && s.end_date.is_none()));
    assert!(subscriptions
        .iter()
        .all(|s| s.start_date == Utc::now().date_naive()));
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn register_without_password_is_rejected() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        post_json("/register", json!({"username": "bob"}), None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"msg": "Username and password required"}));
    assert_eq!(app.store.user_count().await, 0);
}

#[tokio::test]
async fn register_with_empty_username_is_rejected() {
    let app = test_app();

    let (status, body) = register(&app, "", "pw").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"msg": "Username and password required"}));
}

#[tokio::test]
async fn long_username_registers_and_logs_in() {
    let app = test_app();
    let name = "a".repeat(101);

    let (status, body) = register(&app, &name, "pw").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"msg": "User registered successfully"}));

    let (status, _) = login(&app, &name, "pw").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_json_gets_a_msg_body() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].is_string());
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = test_app();
    register(&app, "alice", "pw1").await;

    let (status, body) = login(&app, "alice", "wrong").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"msg": "Invalid credentials"}));
}

#[tokio::test]
async fn login_with_unknown_user_matches_wrong_password() {
    let app = test_app();

    let (status, body) = login(&app, "nobody", "pw1").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"msg": "Invalid credentials"}));
}

#[tokio::test]
async fn login_without_fields_is_bad_request() {
    let app = test_app();

    let (status, body) = send(&app.router, post_json("/login", json!({}), None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"msg": "Username and password required"}));
}

#[tokio::test]
async fn login_token_subject_is_the_user() {
    let app = test_app();
    register(&app, "alice", "pw1").await;

    let (_, body) = login(&app, "alice", "pw1").await;
    let token = body["access_token"].as_str().unwrap();

    use subscription_service::ports::SessionValidator;
    let user = app.tokens.validate(token).await.unwrap();
    assert_eq!(user.id, UserId::new(1));
}

// =============================================================================
// Plans
// =============================================================================

#[tokio::test]
async fn plans_are_listed_in_id_order() {
    let app = test_app();

    let (status, body) = send(&app.router, get("/plans")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "plan1", "price": 0.0},
            {"id": 2, "name": "Plan2", "price": 10.0}
        ])
    );
}

#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let store = Arc::new(InMemoryStore::new());
    let tokens = Arc::new(token_service());
    let router = app_router(AppState {
        users: store.clone(),
        plans: store.clone(),
        subscriptions: store,
        password_hasher: Arc::new(Argon2PasswordHasher::low_cost()),
        token_issuer: tokens.clone(),
        session_validator: tokens,
    });

    let (status, body) = send(&router, get("/plans")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn plans_ignore_a_bad_token() {
    let app = test_app();
    let request = Request::builder()
        .uri("/plans")
        .header(header::AUTHORIZATION, "Bearer garbage")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Subscribe
// =============================================================================

#[tokio::test]
async fn subscribe_without_token_is_unauthorized() {
    let app = test_app();

    let (status, body) =
        send(&app.router, post_json("/subscribe", json!({"plan_id": 1}), None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"msg": "Missing Authorization Header"}));
    assert!(app.store.subscriptions().await.is_empty());
}

#[tokio::test]
async fn subscribe_with_garbage_token_is_unauthorized() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        post_json("/subscribe", json!({"plan_id": 1}), Some("not.a.jwt")),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"msg": "Invalid token"}));
}

#[tokio::test]
async fn subscribe_with_foreign_signature_is_unauthorized() {
    let app = test_app();
    registered_token(&app, "alice").await;
    let forger = JwtTokenService::new(
        b"some-other-secret-that-is-32-bytes-long",
        ISSUER,
        Duration::from_secs(900),
    );
    let forged = forger.issue(UserId::new(1)).unwrap();

    let (status, body) = send(
        &app.router,
        post_json("/subscribe", json!({"plan_id": 1}), Some(forged.as_str())),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"msg": "Invalid token"}));
}

#[tokio::test]
async fn subscribe_with_expired_token_is_unauthorized() {
    let app = test_app();
    registered_token(&app, "alice").await;
    let expired = app
        .tokens
        .issue_at(UserId::new(1), Utc::now() - chrono::Duration::hours(2))
        .unwrap();

    let (status, body) = send(
        &app.router,
        post_json("/subscribe", json!({"plan_id": 1}), Some(expired.as_str())),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"msg": "Token has expired"}));
}

#[tokio::test]
async fn auth_is_checked_before_the_body() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/subscribe")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, _) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn subscribe_without_plan_id_is_bad_request() {
    let app = test_app();
    let token = registered_token(&app, "alice").await;

    let (status, body) =
        send(&app.router, post_json("/subscribe", json!({}), Some(&token))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"msg": "Plan ID is required"}));
}

#[tokio::test]
async fn subscribe_with_null_plan_id_is_bad_request() {
    let app = test_app();
    let token = registered_token(&app, "alice").await;

    let (status, body) = send(
        &app.router,
        post_json("/subscribe", json!({"plan_id": null}), Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"msg": "Plan ID is required"}));
}

#[tokio::test]
async fn subscribe_accepts_a_numeric_string_plan_id() {
    let app = test_app();
    let token = registered_token(&app, "alice").await;

    let (status, body) = send(
        &app.router,
        post_json("/subscribe", json!({"plan_id": "1"}), Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"msg": "Subscription created successfully"}));
    assert_eq!(app.store.subscriptions().await[0].plan_id, PlanId::new(1));
}

#[tokio::test]
async fn subscribe_with_non_numeric_plan_id_is_bad_request() {
    let app = test_app();
    let token = registered_token(&app, "alice").await;

    let (status, body) = send(
        &app.router,
        post_json("/subscribe", json!({"plan_id": "basic"}), Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].is_string());
    assert!(app.store.subscriptions().await.is_empty());
}

#[tokio::test]
async fn subscribe_to_unknown_plan_is_not_found() {
    let app = test_app();
    let token = registered_token(&app, "alice").await;

    let (status, body) = send(
        &app.router,
        post_json("/subscribe", json!({"plan_id": 99}), Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"msg": "Plan not found"}));
    assert!(app.store.subscriptions().await.is_empty());
}

#[tokio::test]
async fn token_for_missing_user_is_unauthorized() {
    let app = test_app();
    let token = app.tokens.issue(UserId::new(42)).unwrap();

    let (status, body) = send(
        &app.router,
        post_json("/subscribe", json!({"plan_id": 1}), Some(token.as_str())),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"msg": "User not found"}));
}

#[tokio::test]
async fn subscription_belongs_to_the_token_subject() {
    let app = test_app();
    registered_token(&app, "alice").await;
    let bob = registered_token(&app, "bob").await;

    let (status, _) =
        send(&app.router, post_json("/subscribe", json!({"plan_id": 2}), Some(&bob))).await;

    assert_eq!(status, StatusCode::CREATED);
    let subscriptions = app.store.subscriptions().await;
    assert_eq!(subscriptions.len(), 1);
    assert_eq!(subscriptions[0].user_id, UserId::new(2));
    assert_eq!(subscriptions[0].plan_id, PlanId::new(2));
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();

    let (status, body) = send(&app.router, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}
