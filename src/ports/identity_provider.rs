//! Identity provider port.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Identity};

/// Resolves the caller's session credentials into an identity.
///
/// # Contract
///
/// - `Ok(Some(identity))` - a signed-in user with a known email
/// - `Ok(None)` - no session (anonymous caller)
/// - `Err(_)` - the session could not be evaluated; the gate treats this
///   the same as no session
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a bearer token into the current identity.
    ///
    /// `token` is `None` when the request carried no credentials.
    async fn current_identity(&self, token: Option<&str>) -> Result<Option<Identity>, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn IdentityProvider) {}
    }
}
