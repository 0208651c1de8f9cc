//! Axum router for the gate endpoint.

use axum::routing::get;
use axum::Router;

use super::handlers::{check_access, EntitlementAppState};

/// Create the entitlement router.
///
/// # Routes
///
/// - `GET /access` - run the gate for the caller's session
pub fn entitlement_routes() -> Router<EntitlementAppState> {
    Router::new().route("/access", get(check_access))
}
