//! Mock identity provider for testing.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Identity};
use crate::ports::IdentityProvider;

/// Mock identity provider with a fixed token-to-identity map.
///
/// Unknown tokens resolve to `InvalidToken`; an absent token is anonymous.
#[derive(Debug, Default)]
pub struct MockIdentityProvider {
    identities: RwLock<HashMap<String, Identity>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockIdentityProvider {
    /// Creates an empty mock provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token that resolves to the given identity.
    pub fn with_identity(self, token: impl Into<String>, identity: Identity) -> Self {
        self.identities.write().unwrap().insert(token.into(), identity);
        self
    }

    /// Adds a token that resolves to a simple test identity with this email.
    pub fn with_user(self, token: impl Into<String>, email: &str) -> Self {
        let identity = Identity::new("user-test", email, None);
        self.with_identity(token, identity)
    }

    /// Forces all resolutions to return the given error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn current_identity(&self, token: Option<&str>) -> Result<Option<Identity>, AuthError> {
        if let Some(err) = self.force_error.read().unwrap().clone() {
            return Err(err);
        }
        let Some(token) = token else {
            return Ok(None);
        };
        self.identities
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .map(Some)
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_resolves() {
        let provider = MockIdentityProvider::new().with_user("tok", "ana@example.com");

        let identity = provider.current_identity(Some("tok")).await.unwrap().unwrap();
        assert_eq!(identity.email, "ana@example.com");
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let provider = MockIdentityProvider::new();
        let err = provider.current_identity(Some("nope")).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn forced_error_wins() {
        let provider = MockIdentityProvider::new()
            .with_user("tok", "ana@example.com")
            .with_error(AuthError::ServiceUnavailable("down".into()));

        assert!(provider.current_identity(Some("tok")).await.is_err());
    }
}
