//! Entitlement record and the tri-state plan flag.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::Timestamp;

/// Value of the `plano_ativo` column.
///
/// Historical data holds a mix of booleans and text: boolean `true` and the
/// literal `"sim"` both mean an active plan. Everything else, including an
/// absent value, means inactive. The comparison against `"sim"` is exact,
/// matching the store's collation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanFlag {
    Bool(bool),
    Text(String),
}

impl PlanFlag {
    /// The single activation predicate shared by the webhook receiver and
    /// the gate.
    pub fn is_active(&self) -> bool {
        match self {
            PlanFlag::Bool(b) => *b,
            PlanFlag::Text(s) => s == "sim",
        }
    }

    /// Parses the flag from its stored text form.
    ///
    /// `NULL` columns become an inactive flag.
    pub fn from_stored(raw: Option<String>) -> Self {
        match raw.as_deref() {
            Some("true") => PlanFlag::Bool(true),
            Some("false") => PlanFlag::Bool(false),
            Some(other) => PlanFlag::Text(other.to_string()),
            None => PlanFlag::Bool(false),
        }
    }

    /// Renders the flag into its stored text form.
    pub fn to_stored(&self) -> String {
        match self {
            PlanFlag::Bool(b) => b.to_string(),
            PlanFlag::Text(s) => s.clone(),
        }
    }
}

impl From<bool> for PlanFlag {
    fn from(b: bool) -> Self {
        PlanFlag::Bool(b)
    }
}

/// One row of the `usuarios` table, as seen by the entitlement subsystem.
///
/// At most one record exists per email. This subsystem only ever mutates
/// `plano_ativo`; creation and deletion belong to the registration flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementRecord {
    pub id: Uuid,
    pub email: String,
    pub nome: Option<String>,
    pub plano_ativo: PlanFlag,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl EntitlementRecord {
    /// Whether this record grants access to protected content.
    pub fn has_active_plan(&self) -> bool {
        self.plano_ativo.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_true_is_active() {
        assert!(PlanFlag::Bool(true).is_active());
    }

    #[test]
    fn sim_literal_is_active() {
        assert!(PlanFlag::Text("sim".to_string()).is_active());
    }

    #[test]
    fn everything_else_is_inactive() {
        assert!(!PlanFlag::Bool(false).is_active());
        assert!(!PlanFlag::Text("yes".to_string()).is_active());
        assert!(!PlanFlag::Text("Sim".to_string()).is_active());
        assert!(!PlanFlag::Text(String::new()).is_active());
    }

    #[test]
    fn stored_round_trip_preserves_semantics() {
        assert!(PlanFlag::from_stored(Some("true".into())).is_active());
        assert!(PlanFlag::from_stored(Some("sim".into())).is_active());
        assert!(!PlanFlag::from_stored(Some("false".into())).is_active());
        assert!(!PlanFlag::from_stored(None).is_active());
    }

    #[test]
    fn untagged_serde_accepts_both_shapes() {
        let from_bool: PlanFlag = serde_json::from_str("true").unwrap();
        assert!(from_bool.is_active());

        let from_text: PlanFlag = serde_json::from_str("\"sim\"").unwrap();
        assert!(from_text.is_active());
    }
}
