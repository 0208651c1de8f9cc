//! Session-token configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for validating session tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 secret used to validate session tokens.
    pub session_secret: String,
}

impl AuthConfig {
    /// Validate auth configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.session_secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_SESSION_SECRET"));
        }
        if self.session_secret.len() < 32 {
            return Err(ValidationError::SessionSecretTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_secret_is_valid() {
        let config = AuthConfig {
            session_secret: "x".repeat(32),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn short_secret_is_rejected() {
        let config = AuthConfig {
            session_secret: "short".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::SessionSecretTooShort)
        ));
    }
}
