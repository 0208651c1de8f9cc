//! Gate redirect configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::handlers::entitlement::GateDestinations;

/// Redirect destinations used by the entitlement gate.
///
/// Both are opaque targets interpreted by the frontend; defaults match the
/// application's route names.
#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    /// Destination for unauthenticated callers.
    #[serde(default = "default_sign_in")]
    pub sign_in_destination: String,

    /// Destination for callers without an active plan.
    #[serde(default = "default_subscription_offer")]
    pub subscription_offer_destination: String,
}

impl GateConfig {
    /// Validate gate configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sign_in_destination.is_empty() || self.subscription_offer_destination.is_empty() {
            return Err(ValidationError::MissingRequired("gate destinations"));
        }
        Ok(())
    }

    /// Convert into the application-layer destination pair.
    pub fn destinations(&self) -> GateDestinations {
        GateDestinations {
            sign_in: self.sign_in_destination.clone(),
            subscription_offer: self.subscription_offer_destination.clone(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            sign_in_destination: default_sign_in(),
            subscription_offer_destination: default_subscription_offer(),
        }
    }
}

fn default_sign_in() -> String {
    "/login".to_string()
}

fn default_subscription_offer() -> String {
    "/assinatura".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_app_routes() {
        let config = GateConfig::default();
        assert_eq!(config.sign_in_destination, "/login");
        assert_eq!(config.subscription_offer_destination, "/assinatura");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_destination_is_rejected() {
        let config = GateConfig {
            sign_in_destination: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
