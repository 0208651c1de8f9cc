//! Response DTOs for the gate endpoint.

use serde::Serialize;

use crate::application::handlers::entitlement::DENIAL_MESSAGE;
use crate::domain::entitlement::GateDecision;

/// Result of a gate check as seen by the frontend.
///
/// The page reads `checking` and `entitled` to pick between a loading
/// placeholder, rendering nothing while it navigates to `redirect`, or
/// rendering its real content. The backend always answers 200; the redirect
/// is performed client-side.
#[derive(Debug, Clone, Serialize)]
pub struct AccessCheckResponse {
    pub checking: bool,
    pub entitled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AccessCheckResponse {
    /// Build the response for a completed decision.
    pub fn from_decision(decision: GateDecision) -> Self {
        let status = decision.status();
        let message = match &decision {
            GateDecision::RedirectSubscribe { .. } => Some(DENIAL_MESSAGE.to_string()),
            _ => None,
        };
        Self {
            checking: status.checking,
            entitled: status.entitled,
            redirect: decision.redirect_destination().map(str::to_string),
            message,
        }
    }
}
