//! Shared response bodies.
//!
//! Every confirmation and every error leaves the service as `{"msg": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Single-field JSON body used for confirmations and errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Build a `{"msg": ...}` response with the given status.
pub fn message(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(MessageResponse::new(msg))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_response_serializes_to_msg_field() {
        let json = serde_json::to_value(MessageResponse::new("hello")).unwrap();
        assert_eq!(json, serde_json::json!({"msg": "hello"}));
    }

    #[test]
    fn message_sets_status() {
        let response = message(StatusCode::NOT_FOUND, "Plan not found");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
