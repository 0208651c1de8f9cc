//! Entitlement gate endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::AccessCheckResponse;
pub use handlers::{check_access, EntitlementAppState};
pub use routes::entitlement_routes;
