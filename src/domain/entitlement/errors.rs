//! Error taxonomy for webhook processing.

use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Errors raised while processing a payment-provider webhook.
///
/// The variants map directly onto the HTTP contract:
///
/// - `MissingEmail` / `MissingStatus` are client errors (400) raised before
///   any store access
/// - `StoreLookup` and `StoreWrite` are server errors (500) on the
///   activation path; the provider retries on non-2xx
///
/// Deactivation write failures never become a `StoreWrite` error: they are
/// logged and the event is acknowledged anyway (see the policy note on
/// `ProcessWebhookHandler`).
#[derive(Debug, Clone, Error)]
pub enum WebhookError {
    #[error("Email é obrigatório")]
    MissingEmail,

    #[error("Status é obrigatório")]
    MissingStatus,

    #[error("Erro ao buscar usuário no banco de dados")]
    StoreLookup(#[source] DomainError),

    #[error("Erro ao atualizar plano do usuário")]
    StoreWrite(#[source] DomainError),
}

impl WebhookError {
    /// True for errors caused by the caller's payload.
    pub fn is_client_error(&self) -> bool {
        matches!(self, WebhookError::MissingEmail | WebhookError::MissingStatus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_client_errors() {
        assert!(WebhookError::MissingEmail.is_client_error());
        assert!(WebhookError::MissingStatus.is_client_error());
    }

    #[test]
    fn store_failures_are_server_errors() {
        let err = WebhookError::StoreLookup(DomainError::database("boom"));
        assert!(!err.is_client_error());

        let err = WebhookError::StoreWrite(DomainError::database("boom"));
        assert!(!err.is_client_error());
    }

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(WebhookError::MissingEmail.to_string(), "Email é obrigatório");
        assert_eq!(WebhookError::MissingStatus.to_string(), "Status é obrigatório");
    }
}
