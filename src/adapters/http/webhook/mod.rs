//! Kiwify webhook endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorBody, KiwifyCustomer, KiwifyWebhookPayload, ProcessedData, WebhookAck, WebhookDescriptor,
};
pub use handlers::{receive_webhook, webhook_health, WebhookAppState};
pub use routes::webhook_routes;
