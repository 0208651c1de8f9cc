//! Payment-provider status classification.

/// Statuses that activate a plan.
const ACTIVATING: [&str; 4] = ["paid", "aprovado", "active", "completed"];

/// Statuses that deactivate a plan.
const DEACTIVATING: [&str; 4] = ["cancelled", "refunded", "expired", "canceled"];

/// Classification of a provider status string.
///
/// The vocabulary is fixed: statuses outside both sets (e.g. `"pending"`)
/// are acknowledged without touching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Activating,
    Deactivating,
    Neutral,
}

impl StatusClass {
    /// Classifies a raw provider status, case-insensitively.
    pub fn classify(status: &str) -> Self {
        let lowered = status.to_lowercase();
        if ACTIVATING.contains(&lowered.as_str()) {
            StatusClass::Activating
        } else if DEACTIVATING.contains(&lowered.as_str()) {
            StatusClass::Deactivating
        } else {
            StatusClass::Neutral
        }
    }
}
