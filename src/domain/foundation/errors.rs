//! Error types for the domain layer.

use thiserror::Error;

/// Error codes for store and adapter failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The underlying database rejected the operation.
    DatabaseError,
    /// Input failed validation before reaching the store.
    ValidationFailed,
}

/// Error raised by store adapters and surfaced through the ports.
///
/// Callers branch on [`ErrorCode`] where the distinction matters; the gate
/// treats every code as "deny access" (fail-closed).
#[derive(Debug, Clone, Error)]
#[error("{code:?}: {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a domain error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_errors_carry_code_and_message() {
        let err = DomainError::database("connection reset");
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.to_string().contains("connection reset"));
    }
}
