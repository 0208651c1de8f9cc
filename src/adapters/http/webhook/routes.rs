//! Axum router for the webhook endpoint.

use axum::routing::post;
use axum::Router;

use super::handlers::{receive_webhook, webhook_health, WebhookAppState};

/// Create the webhook router.
///
/// # Routes
///
/// - `POST /kiwify` - process a provider delivery (no user auth; the
///   provider calls this directly)
/// - `GET /kiwify` - liveness probe
pub fn webhook_routes() -> Router<WebhookAppState> {
    Router::new().route("/kiwify", post(receive_webhook).get(webhook_health))
}
