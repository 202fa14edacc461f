//! Bearer token authentication for `/subscribe`.
//!
//! `auth_middleware` validates the `Authorization: Bearer` header through the
//! `SessionValidator` port and stores the caller in request extensions.
//! `RequireAuth` reads it back out in the handler. A request without a token
//! passes the middleware untouched and is rejected by the extractor, so the
//! missing-header case and the bad-token case produce different messages:
//!
//! | Situation | Message |
//! |-----------|---------|
//! | No bearer token | `Missing Authorization Header` |
//! | Bad signature, malformed, wrong issuer | `Invalid token` |
//! | Expired | `Token has expired` |

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::response::message;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Extract the token from an `Authorization: Bearer <token>` header value.
fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Validates a bearer token if one is present.
///
/// Invalid and expired tokens are answered with 401 here; the handler never
/// runs for them.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_owned);

    let Some(token) = token else {
        return next.run(request).await;
    };

    match validator.validate(&token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            if !e.requires_reauthentication() {
                tracing::error!(error = %e, "Unexpected token validation failure");
            }
            let text = match e {
                AuthError::TokenExpired => "Token has expired",
                _ => "Invalid token",
            };
            tracing::debug!(reason = text, "Rejected bearer token");
            message(StatusCode::UNAUTHORIZED, text)
        }
    }
}

/// The caller put into extensions by `auth_middleware`.
///
/// Rejects with 401 when there is none. List it before any body extractor
/// so a missing token wins over a malformed body.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::MissingToken)
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No bearer token was provided.
    MissingToken,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::MissingToken => {
                message(StatusCode::UNAUTHORIZED, "Missing Authorization Header")
            }
        }
    }
}
