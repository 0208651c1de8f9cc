//! Entitlement handlers: webhook processing and the access gate.

mod check_entitlement;
mod process_webhook;

pub use check_entitlement::{EntitlementGate, GateDestinations, DENIAL_MESSAGE};
pub use process_webhook::{
    ProcessWebhookCommand, ProcessWebhookHandler, WebhookAction, WebhookOutcome,
};
