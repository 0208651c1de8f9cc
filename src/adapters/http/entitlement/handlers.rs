//! Axum handlers for the gate endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::entitlement::{EntitlementGate, GateDestinations};
use crate::ports::{EntitlementStore, IdentityProvider, UserNotifier};

use super::dto::AccessCheckResponse;

/// Shared state for gate routes.
#[derive(Clone)]
pub struct EntitlementAppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub store: Arc<dyn EntitlementStore>,
    pub notifier: Arc<dyn UserNotifier>,
    pub destinations: GateDestinations,
}

impl EntitlementAppState {
    fn gate(&self) -> EntitlementGate {
        EntitlementGate::new(
            self.identity.clone(),
            self.store.clone(),
            self.notifier.clone(),
            self.destinations.clone(),
        )
    }
}

/// `GET /api/entitlement/access` - run the gate for the caller.
///
/// Identity comes from the `Authorization: Bearer` header; an absent or
/// unreadable token resolves to a sign-in redirect, never an error status.
pub async fn check_access(
    State(state): State<EntitlementAppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let decision = state.gate().check(bearer_token(&headers)).await;
    Json(AccessCheckResponse::from_decision(decision))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_or_malformed_header_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));
        assert_eq!(bearer_token(&headers), None);
    }
}
