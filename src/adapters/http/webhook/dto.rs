//! Request and response DTOs for the Kiwify webhook endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::handlers::entitlement::{ProcessWebhookCommand, WebhookOutcome};
use crate::domain::entitlement::EntitlementRecord;
use crate::domain::foundation::Timestamp;

/// Inbound webhook payload.
///
/// Kiwify's payload shape varies by event kind: the email may arrive at the
/// top level or inside a `Customer` sub-object, and the status may be named
/// `status` or `subscription_status`. Resolution always tries the top-level
/// field first. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KiwifyWebhookPayload {
    pub email: Option<String>,
    pub status: Option<String>,
    pub subscription_status: Option<String>,
    /// Provider identifiers arrive as strings or numbers depending on the
    /// event kind.
    pub product_id: Option<Value>,
    pub order_id: Option<Value>,
    pub customer_name: Option<String>,
    #[serde(rename = "Customer")]
    pub customer: Option<KiwifyCustomer>,
}

/// Nested customer sub-object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KiwifyCustomer {
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl KiwifyWebhookPayload {
    /// Email: top-level field, else the customer sub-object.
    pub fn resolved_email(&self) -> Option<String> {
        self.email
            .clone()
            .or_else(|| self.customer.as_ref().and_then(|c| c.email.clone()))
    }

    /// Status: `status`, else the `subscription_status` alias.
    pub fn resolved_status(&self) -> Option<String> {
        self.status.clone().or_else(|| self.subscription_status.clone())
    }

    /// Customer name: `Customer.full_name`, else top-level `customer_name`.
    pub fn resolved_customer_name(&self) -> Option<String> {
        self.customer
            .as_ref()
            .and_then(|c| c.full_name.clone())
            .or_else(|| self.customer_name.clone())
    }

    /// Convert into the application command.
    pub fn into_command(self) -> ProcessWebhookCommand {
        ProcessWebhookCommand {
            email: self.resolved_email(),
            status: self.resolved_status(),
            customer_name: self.resolved_customer_name(),
            product_id: self.product_id.as_ref().map(value_to_string),
            order_id: self.order_id.as_ref().map(value_to_string),
        }
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Echo of what was processed, included in acknowledgements.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedData {
    pub email: String,
    pub status: String,
    pub action: &'static str,
    pub timestamp: String,
}

/// Successful acknowledgement body.
///
/// Activations echo the updated record under `usuario`; every other
/// acknowledged path echoes `processed_data` instead.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAck {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario: Option<EntitlementRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_data: Option<ProcessedData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl WebhookAck {
    /// Build the acknowledgement body for a processed delivery.
    pub fn from_outcome(outcome: WebhookOutcome) -> Self {
        let timestamp = outcome.processed_at.to_rfc3339();
        match outcome.record {
            Some(record) => Self {
                success: true,
                message: outcome.message,
                usuario: Some(record),
                processed_data: None,
                timestamp: Some(timestamp),
            },
            None => Self {
                success: true,
                message: outcome.message,
                usuario: None,
                processed_data: Some(ProcessedData {
                    email: outcome.email,
                    status: outcome.status,
                    action: outcome.action.as_wire(),
                    timestamp,
                }),
                timestamp: None,
            },
        }
    }
}

/// Error envelope; callers never see a stack trace.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Static liveness descriptor for `GET` probes.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookDescriptor {
    pub message: &'static str,
    pub endpoint: &'static str,
    pub methods: [&'static str; 1],
    pub timestamp: String,
}

impl WebhookDescriptor {
    pub fn current() -> Self {
        Self {
            message: "Webhook Kiwify está funcionando",
            endpoint: "/api/webhook/kiwify",
            methods: ["POST"],
            timestamp: Timestamp::now().to_rfc3339(),
        }
    }
}
