//! HTTP handlers for account endpoints.
//!
//! These handlers connect axum routes to the register and login command handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::extract::JsonBody;
use crate::adapters::http::response::{message, MessageResponse};
use crate::application::handlers::account::{
    LoginUserCommand, LoginUserHandler, RegisterUserCommand, RegisterUserHandler,
};
use crate::domain::user::UserError;
use crate::ports::{PasswordHasher, TokenIssuer, UserRepository};

use super::dto::{CredentialsRequest, LoginResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Dependencies of the account endpoints.
#[derive(Clone)]
pub struct AccountAppState {
    pub users: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
}

impl AccountAppState {
    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.users.clone(), self.password_hasher.clone())
    }

    pub fn login_user_handler(&self) -> LoginUserHandler {
        LoginUserHandler::new(
            self.users.clone(),
            self.password_hasher.clone(),
            self.token_issuer.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /register - Create an account
pub async fn register(
    State(state): State<AccountAppState>,
    JsonBody(request): JsonBody<CredentialsRequest>,
) -> Result<impl IntoResponse, AccountApiError> {
    let (username, password) = request.into_parts();

    state
        .register_user_handler()
        .handle(RegisterUserCommand { username, password })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// POST /login - Exchange credentials for an access token
pub async fn login(
    State(state): State<AccountAppState>,
    JsonBody(request): JsonBody<CredentialsRequest>,
) -> Result<impl IntoResponse, AccountApiError> {
    let (username, password) = request.into_parts();

    let result = state
        .login_user_handler()
        .handle(LoginUserCommand { username, password })
        .await?;

    Ok(Json(LoginResponse {
        access_token: result.access_token.into_string(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Mapping
// ════════════════════════════════════════════════════════════════════════════════

/// Maps `UserError` onto status codes and `{"msg": ...}` bodies.
#[derive(Debug)]
pub struct AccountApiError(UserError);

impl From<UserError> for AccountApiError {
    fn from(err: UserError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AccountApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            UserError::ValidationFailed { .. } | UserError::AlreadyExists(_) => {
                StatusCode::BAD_REQUEST
            }
            UserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            UserError::Infrastructure(detail) => {
                tracing::error!(error = %detail, "Account request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        message(status, self.0.message())
    }
}
