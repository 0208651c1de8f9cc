//! HTTP adapters - axum routes, handlers, and DTOs.

pub mod entitlement;
pub mod webhook;

use axum::Router;

use entitlement::EntitlementAppState;
use webhook::WebhookAppState;

/// Assemble the full API router.
///
/// Webhook routes carry no user authentication (the payment provider calls
/// them directly); gate routes resolve the caller's session themselves.
pub fn api_router(
    webhook_state: WebhookAppState,
    entitlement_state: EntitlementAppState,
) -> Router {
    Router::new()
        .nest(
            "/api/webhook",
            webhook::webhook_routes().with_state(webhook_state),
        )
        .nest(
            "/api/entitlement",
            entitlement::entitlement_routes().with_state(entitlement_state),
        )
}
