//! Gate decision types.
//!
//! One gate check resolves `Checking` into exactly one terminal state:
//!
//! ```text
//! {Checking} -> {RedirectSignIn | RedirectSubscribe | Granted}
//! ```
//!
//! The check runs once per page load and is never re-entered concurrently
//! for the same page instance, so no debouncing is modeled here.

use serde::Serialize;

/// Terminal outcome of an entitlement check.
///
/// Redirect variants carry the opaque destination configured by the
/// surrounding application; the gate does not interpret them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Identity and entitlement both check out; the page renders.
    Granted,

    /// No resolved identity. The store is never consulted in this state.
    RedirectSignIn { destination: String },

    /// Identity present but the plan is missing, inactive, or unreadable
    /// (fail-closed).
    RedirectSubscribe { destination: String },
}

impl GateDecision {
    /// Returns true when access was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, GateDecision::Granted)
    }

    /// Destination the caller should navigate to, if any.
    pub fn redirect_destination(&self) -> Option<&str> {
        match self {
            GateDecision::Granted => None,
            GateDecision::RedirectSignIn { destination }
            | GateDecision::RedirectSubscribe { destination } => Some(destination),
        }
    }

    /// Observable flag pair for the calling page.
    pub fn status(&self) -> GateStatus {
        GateStatus {
            checking: false,
            entitled: self.is_granted(),
        }
    }
}

/// The two flags a protected page reads to pick between a loading
/// placeholder, rendering nothing mid-redirect, or its real content.
///
/// `checking` is true only while a check is in flight; a completed decision
/// always reports `checking: false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateStatus {
    pub checking: bool,
    pub entitled: bool,
}
