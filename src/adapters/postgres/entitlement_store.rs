//! PostgreSQL implementation of EntitlementStore.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entitlement::{EntitlementRecord, PlanFlag};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::EntitlementStore;

/// PostgreSQL implementation of the EntitlementStore port.
///
/// Mutations are single-row `UPDATE ... WHERE email = $1` statements, so
/// per-row atomicity comes from the database; no transactions are used.
pub struct PostgresEntitlementStore {
    pool: PgPool,
}

impl PostgresEntitlementStore {
    /// Creates a new store backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row of the `usuarios` table.
#[derive(Debug, sqlx::FromRow)]
struct UsuarioRow {
    id: Uuid,
    email: String,
    nome: Option<String>,
    plano_ativo: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UsuarioRow> for EntitlementRecord {
    fn from(row: UsuarioRow) -> Self {
        EntitlementRecord {
            id: row.id,
            email: row.email,
            nome: row.nome,
            plano_ativo: PlanFlag::from_stored(row.plano_ativo),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[async_trait]
impl EntitlementStore for PostgresEntitlementStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<EntitlementRecord>, DomainError> {
        let row = sqlx::query_as::<_, UsuarioRow>(
            r#"
            SELECT id, email, nome, plano_ativo, created_at, updated_at
            FROM usuarios
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("entitlement lookup failed: {e}")))?;

        Ok(row.map(EntitlementRecord::from))
    }

    async fn set_active(
        &self,
        email: &str,
        active: bool,
    ) -> Result<Option<EntitlementRecord>, DomainError> {
        let row = sqlx::query_as::<_, UsuarioRow>(
            r#"
            UPDATE usuarios
            SET plano_ativo = $2, updated_at = NOW()
            WHERE email = $1
            RETURNING id, email, nome, plano_ativo, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(PlanFlag::from(active).to_stored())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("entitlement update failed: {e}")))?;

        Ok(row.map(EntitlementRecord::from))
    }
}
