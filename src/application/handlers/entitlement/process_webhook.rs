//! ProcessWebhookHandler - Command handler for payment-provider webhooks.
//!
//! Translates Kiwify order events into plan-flag writes. Processing is
//! idempotent: activation and deactivation are set-operations, so redelivery
//! of the same event leaves the store in the same state.

use std::sync::Arc;

use crate::domain::entitlement::{EntitlementRecord, StatusClass, WebhookError};
use crate::domain::foundation::Timestamp;
use crate::ports::EntitlementStore;

/// Deactivation write failures are acknowledged as webhook success, while
/// activation write failures return a server error so the provider retries.
/// The asymmetry is a deliberate policy choice pending product review; flip
/// this switch to make deactivation failures fatal as well.
pub const DEACTIVATION_WRITE_FAILURES_ARE_FATAL: bool = false;

/// Command to process one webhook delivery.
///
/// Fields arrive already resolved from the payload's two possible shapes
/// (top-level or nested customer object); `None` means the field was absent
/// in both places.
#[derive(Debug, Clone, Default)]
pub struct ProcessWebhookCommand {
    pub email: Option<String>,
    pub status: Option<String>,
    pub product_id: Option<String>,
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
}

/// Action taken for a processed event, echoed to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookAction {
    /// An activating status updated the plan flag.
    PlanActivated,
    /// The event was acknowledged without activating a plan.
    StatusProcessed,
}

impl WebhookAction {
    /// Wire form of the action, kept in the provider's vocabulary.
    pub fn as_wire(&self) -> &'static str {
        match self {
            WebhookAction::PlanActivated => "plano_ativado",
            WebhookAction::StatusProcessed => "status_processado",
        }
    }
}

/// Structured result for every successfully acknowledged delivery.
#[derive(Debug, Clone)]
pub struct WebhookOutcome {
    pub message: String,
    pub email: String,
    pub status: String,
    pub action: WebhookAction,
    /// Updated record, present only when an activation wrote the flag.
    pub record: Option<EntitlementRecord>,
    pub processed_at: Timestamp,
}

/// Handler for payment-provider webhook deliveries.
///
/// The store is an injected dependency so tests can observe exactly which
/// accesses each path performs.
pub struct ProcessWebhookHandler {
    store: Arc<dyn EntitlementStore>,
}

impl ProcessWebhookHandler {
    pub fn new(store: Arc<dyn EntitlementStore>) -> Self {
        Self { store }
    }

    /// Process one delivery.
    ///
    /// # Errors
    ///
    /// - `MissingEmail` / `MissingStatus` before any store access
    /// - `StoreLookup` / `StoreWrite` on the activation path only
    pub async fn handle(&self, cmd: ProcessWebhookCommand) -> Result<WebhookOutcome, WebhookError> {
        let email = non_empty(cmd.email).ok_or(WebhookError::MissingEmail)?;
        let status = non_empty(cmd.status).ok_or(WebhookError::MissingStatus)?;

        tracing::info!(
            email = %email,
            status = %status,
            product_id = cmd.product_id.as_deref(),
            order_id = cmd.order_id.as_deref(),
            customer_name = cmd.customer_name.as_deref(),
            "webhook received"
        );

        match StatusClass::classify(&status) {
            StatusClass::Activating => self.activate(email, status).await,
            StatusClass::Deactivating => self.deactivate(email, status).await,
            StatusClass::Neutral => {
                tracing::info!(email = %email, status = %status, "status outside both sets, no mutation");
                Ok(acknowledged(email, status))
            }
        }
    }

    async fn activate(
        &self,
        email: String,
        status: String,
    ) -> Result<WebhookOutcome, WebhookError> {
        let existing = self
            .store
            .find_by_email(&email)
            .await
            .map_err(WebhookError::StoreLookup)?;

        if existing.is_none() {
            // The user may have paid before registering, or the emails may
            // not match. Acknowledge so the provider does not retry forever.
            tracing::warn!(email = %email, "no entitlement record for activating event");
            return Ok(WebhookOutcome {
                message: "Webhook processado - usuário não encontrado".to_string(),
                email,
                status,
                action: WebhookAction::StatusProcessed,
                record: None,
                processed_at: Timestamp::now(),
            });
        }

        let updated = self
            .store
            .set_active(&email, true)
            .await
            .map_err(WebhookError::StoreWrite)?;

        tracing::info!(email = %email, "plan activated");
        Ok(WebhookOutcome {
            message: "Plano ativado com sucesso".to_string(),
            email,
            status,
            action: WebhookAction::PlanActivated,
            record: updated,
            processed_at: Timestamp::now(),
        })
    }

    async fn deactivate(
        &self,
        email: String,
        status: String,
    ) -> Result<WebhookOutcome, WebhookError> {
        match self.store.set_active(&email, false).await {
            Ok(Some(_)) => tracing::info!(email = %email, "plan deactivated"),
            Ok(None) => tracing::warn!(email = %email, "no entitlement record to deactivate"),
            Err(e) => {
                if DEACTIVATION_WRITE_FAILURES_ARE_FATAL {
                    return Err(WebhookError::StoreWrite(e));
                }
                tracing::warn!(email = %email, error = %e, "deactivation write failed, acknowledging anyway");
            }
        }

        Ok(acknowledged(email, status))
    }
}

fn acknowledged(email: String, status: String) -> WebhookOutcome {
    WebhookOutcome {
        message: "Webhook processado com sucesso".to_string(),
        email,
        status,
        action: WebhookAction::StatusProcessed,
        record: None,
        processed_at: Timestamp::now(),
    }
}

/// Treats absent and blank fields the same way.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
