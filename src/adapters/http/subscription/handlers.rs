//! HTTP handlers for plan listing and subscribing.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::extract::JsonBody;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::response::{message, MessageResponse};
use crate::application::handlers::subscription::{
    ListPlansHandler, ListPlansQuery, SubscribeToPlanCommand, SubscribeToPlanHandler,
};
use crate::domain::foundation::PlanId;
use crate::domain::subscription::SubscriptionError;
use crate::ports::{PlanReader, SubscriptionRepository};

use super::dto::{PlanResponse, SubscribeRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Dependencies of the plan and subscription endpoints.
#[derive(Clone)]
pub struct SubscriptionAppState {
    pub plans: Arc<dyn PlanReader>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
}

impl SubscriptionAppState {
    pub fn list_plans_handler(&self) -> ListPlansHandler {
        ListPlansHandler::new(self.plans.clone())
    }

    pub fn subscribe_handler(&self) -> SubscribeToPlanHandler {
        SubscribeToPlanHandler::new(self.plans.clone(), self.subscriptions.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /plans - List every plan
pub async fn list_plans(
    State(state): State<SubscriptionAppState>,
) -> Result<impl IntoResponse, SubscriptionApiError> {
    let plans = state.list_plans_handler().handle(ListPlansQuery).await?;

    let response: Vec<PlanResponse> = plans.into_iter().map(PlanResponse::from).collect();
    Ok(Json(response))
}

/// POST /subscribe - Subscribe the caller to a plan
pub async fn subscribe(
    State(state): State<SubscriptionAppState>,
    RequireAuth(user): RequireAuth,
    JsonBody(request): JsonBody<SubscribeRequest>,
) -> Result<impl IntoResponse, SubscriptionApiError> {
    let cmd = SubscribeToPlanCommand {
        user_id: user.id,
        plan_id: request.plan_id.map(PlanId::new),
    };

    state.subscribe_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Subscription created successfully")),
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Mapping
// ════════════════════════════════════════════════════════════════════════════════

/// Maps `SubscriptionError` onto status codes and `{"msg": ...}` bodies.
#[derive(Debug)]
pub struct SubscriptionApiError(SubscriptionError);

impl From<SubscriptionError> for SubscriptionApiError {
    fn from(err: SubscriptionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for SubscriptionApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SubscriptionError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            SubscriptionError::PlanNotFound(_) => StatusCode::NOT_FOUND,
            SubscriptionError::UnknownUser(user_id) => {
                tracing::warn!(user_id = %user_id, "Valid token for a user that no longer exists");
                StatusCode::UNAUTHORIZED
            }
            SubscriptionError::Infrastructure(detail) => {
                tracing::error!(error = %detail, "Subscription request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        message(status, self.0.message())
    }
}
