//! In-memory implementation of EntitlementStore.
//!
//! Used by integration tests and local development without a database.
//! Behavior mirrors the PostgreSQL adapter: writes update existing records
//! only and report `None` when no email matched.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entitlement::{EntitlementRecord, PlanFlag};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::EntitlementStore;

/// In-memory entitlement store.
#[derive(Debug, Default)]
pub struct InMemoryEntitlementStore {
    records: RwLock<HashMap<String, EntitlementRecord>>,
}

impl InMemoryEntitlementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record, standing in for the registration flow.
    pub fn seed(&self, email: &str, nome: Option<&str>, flag: PlanFlag) {
        let now = Timestamp::now();
        self.records.write().unwrap().insert(
            email.to_string(),
            EntitlementRecord {
                id: Uuid::new_v4(),
                email: email.to_string(),
                nome: nome.map(str::to_string),
                plano_ativo: flag,
                created_at: now,
                updated_at: now,
            },
        );
    }

    /// Builder form of [`seed`](Self::seed).
    pub fn with_record(self, email: &str, flag: PlanFlag) -> Self {
        self.seed(email, None, flag);
        self
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EntitlementStore for InMemoryEntitlementStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<EntitlementRecord>, DomainError> {
        Ok(self.records.read().unwrap().get(email).cloned())
    }

    async fn set_active(
        &self,
        email: &str,
        active: bool,
    ) -> Result<Option<EntitlementRecord>, DomainError> {
        let mut records = self.records.write().unwrap();
        Ok(records.get_mut(email).map(|record| {
            record.plano_ativo = PlanFlag::Bool(active);
            record.updated_at = Timestamp::now();
            record.clone()
        }))
    }
}
