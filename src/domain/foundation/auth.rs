//! Authentication types for the domain layer.
//!
//! These types represent a resolved user session. They have no provider
//! dependencies: any session backend can populate them via the
//! `IdentityProvider` port.

use thiserror::Error;

/// Identity of the currently signed-in user.
///
/// The `email` is the natural key into the entitlement store and must match
/// the email the payment provider sends in webhook events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Opaque user identifier from the session backend.
    pub id: String,

    /// Email address, exactly as held by the session backend.
    pub email: String,

    /// Display name if the session carries one.
    pub display_name: Option<String>,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(id: impl Into<String>, email: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name,
        }
    }
}

/// Errors from identity resolution.
///
/// The gate never surfaces these to the caller: every variant collapses into
/// "unauthenticated, redirect to sign-in".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Session token is missing or malformed")]
    InvalidToken,

    #[error("Session token has expired")]
    TokenExpired,

    #[error("Session backend unavailable: {0}")]
    ServiceUnavailable(String),
}
