//! Axum handlers for the Kiwify webhook endpoint.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::entitlement::ProcessWebhookHandler;
use crate::ports::EntitlementStore;

use super::dto::{ErrorBody, KiwifyWebhookPayload, WebhookAck, WebhookDescriptor};

/// Shared state for webhook routes.
#[derive(Clone)]
pub struct WebhookAppState {
    pub store: Arc<dyn EntitlementStore>,
}

impl WebhookAppState {
    fn webhook_handler(&self) -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(self.store.clone())
    }
}

/// `POST /api/webhook/kiwify` - process one provider delivery.
///
/// Responds 200 for every acknowledged event (including benign no-ops),
/// 400 when the payload is missing its email or status, and 500 when the
/// store fails on the activation path so the provider retries.
pub async fn receive_webhook(
    State(state): State<WebhookAppState>,
    Json(payload): Json<KiwifyWebhookPayload>,
) -> Response {
    match state.webhook_handler().handle(payload.into_command()).await {
        Ok(outcome) => (StatusCode::OK, Json(WebhookAck::from_outcome(outcome))).into_response(),
        Err(err) => {
            let status = if err.is_client_error() {
                tracing::warn!(error = %err, "webhook rejected");
                StatusCode::BAD_REQUEST
            } else {
                tracing::error!(error = %err, "webhook processing failed");
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (
                status,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// `GET /api/webhook/kiwify` - liveness probe, always 200.
pub async fn webhook_health() -> impl IntoResponse {
    Json(WebhookDescriptor::current())
}
