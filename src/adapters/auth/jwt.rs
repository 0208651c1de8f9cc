//! JWT implementation of IdentityProvider.
//!
//! Validates HS256 session tokens minted by the auth flow. The token's
//! `email` claim is the key into the entitlement store, so a token without
//! one is unusable and treated as invalid.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, Identity};
use crate::ports::IdentityProvider;

/// Claims carried by a session token.
#[derive(Debug, Deserialize)]
struct SessionClaims {
    sub: String,
    email: Option<String>,
    name: Option<String>,
    #[allow(dead_code)]
    exp: usize,
}

/// Validates session tokens with a shared HS256 secret.
pub struct JwtIdentityProvider {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityProvider {
    /// Creates a provider from the configured session secret.
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn current_identity(&self, token: Option<&str>) -> Result<Option<Identity>, AuthError> {
        let Some(token) = token else {
            return Ok(None);
        };

        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    tracing::warn!(error = %e, "session token rejected");
                    AuthError::InvalidToken
                }
            },
        )?;

        let Some(email) = data.claims.email.filter(|e| !e.is_empty()) else {
            tracing::warn!("session token missing email claim");
            return Err(AuthError::InvalidToken);
        };

        Ok(Some(Identity::new(data.claims.sub, email, data.claims.name)))
    }
}
