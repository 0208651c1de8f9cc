//! Entitlement store port.
//!
//! Contract for the persistent collection holding one entitlement record per
//! email. Implementations wrap the actual database; the core never issues
//! multi-row transactions and relies on the store's atomic update-by-filter
//! semantics for per-row consistency.

use async_trait::async_trait;

use crate::domain::entitlement::EntitlementRecord;
use crate::domain::foundation::DomainError;

/// Port for entitlement record lookup and mutation.
///
/// # Contract
///
/// - At most one record exists per email; lookups match the email exactly
/// - `set_active` is an idempotent set-operation, never an increment
/// - Implementations never create records: a write for an unknown email
///   updates zero rows and returns `None`
#[async_trait]
pub trait EntitlementStore: Send + Sync {
    /// Find the entitlement record for an email.
    ///
    /// Returns `Ok(None)` when no record exists; this is a normal outcome,
    /// not an error.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on any store failure
    async fn find_by_email(&self, email: &str) -> Result<Option<EntitlementRecord>, DomainError>;

    /// Set the plan flag for the record matching `email` exactly.
    ///
    /// Returns the updated record, or `None` when no record matched.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on any store failure
    async fn set_active(
        &self,
        email: &str,
        active: bool,
    ) -> Result<Option<EntitlementRecord>, DomainError>;
}
