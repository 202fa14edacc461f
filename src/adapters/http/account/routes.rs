//! Axum router configuration for account endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, register, AccountAppState};

/// Create the account router.
///
/// # Routes
/// - `POST /register` - Create an account
/// - `POST /login` - Obtain an access token
pub fn account_routes() -> Router<AccountAppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
