//! Entitlement domain - subscription access for a single email.
//!
//! The entitlement subsystem has two halves that must agree on one
//! predicate:
//!
//! - the **webhook receiver** translates payment-provider status strings into
//!   writes of the per-user plan flag, and
//! - the **gate** reads the flag before a protected page renders.
//!
//! [`PlanFlag::is_active`] is the single implementation of the activation
//! predicate; both halves go through it.

mod errors;
mod gate;
mod record;
mod status;

pub use errors::WebhookError;
pub use gate::{GateDecision, GateStatus};
pub use record::{EntitlementRecord, PlanFlag};
pub use status::StatusClass;
