//! EntitlementGate - Query handler run before protected content renders.
//!
//! Fail-closed by design: any ambiguity about the caller's entitlement
//! (missing record, store failure, unreadable session) denies access. Do not
//! relax this to fail-open; that would silently bypass authorization on
//! transient store errors.

use std::sync::Arc;

use crate::domain::entitlement::GateDecision;
use crate::ports::{EntitlementStore, IdentityProvider, UserNotifier};

/// Message shown to a signed-in user whose plan is not active.
pub const DENIAL_MESSAGE: &str =
    "Você precisa de uma assinatura ativa para acessar este conteúdo";

/// Opaque redirect targets supplied by the surrounding application.
#[derive(Debug, Clone)]
pub struct GateDestinations {
    pub sign_in: String,
    pub subscription_offer: String,
}

/// Entitlement gate invoked at the start of every protected page load.
///
/// One invocation resolves to exactly one [`GateDecision`]; the check itself
/// never returns an error.
pub struct EntitlementGate {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn EntitlementStore>,
    notifier: Arc<dyn UserNotifier>,
    destinations: GateDestinations,
}

impl EntitlementGate {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn EntitlementStore>,
        notifier: Arc<dyn UserNotifier>,
        destinations: GateDestinations,
    ) -> Self {
        Self {
            identity,
            store,
            notifier,
            destinations,
        }
    }

    /// Run the check for the caller identified by `token`.
    pub async fn check(&self, token: Option<&str>) -> GateDecision {
        let identity = match self.identity.current_identity(token).await {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                return GateDecision::RedirectSignIn {
                    destination: self.destinations.sign_in.clone(),
                };
            }
            Err(e) => {
                // Unresolvable sessions are treated as unauthenticated, not
                // as errors the page has to handle.
                tracing::warn!(error = %e, "session resolution failed");
                return GateDecision::RedirectSignIn {
                    destination: self.destinations.sign_in.clone(),
                };
            }
        };

        let record = match self.store.find_by_email(&identity.email).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::info!(email = %identity.email, "no entitlement record, denying access");
                return self.deny_subscribe();
            }
            Err(e) => {
                tracing::warn!(email = %identity.email, error = %e, "entitlement lookup failed, denying access");
                return self.deny_subscribe();
            }
        };

        if !record.has_active_plan() {
            self.notifier.notify_access_denied(DENIAL_MESSAGE).await;
            return self.deny_subscribe();
        }

        GateDecision::Granted
    }

    fn deny_subscribe(&self) -> GateDecision {
        GateDecision::RedirectSubscribe {
            destination: self.destinations.subscription_offer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::domain::entitlement::{EntitlementRecord, PlanFlag};
    use crate::domain::foundation::{AuthError, DomainError, Identity, Timestamp};

    // ══════════════════════════════════════════════════════════════
    // Test Infrastructure
    // ══════════════════════════════════════════════════════════════

    struct MockIdentityProvider {
        identity: Option<Identity>,
        force_error: Option<AuthError>,
    }

    impl MockIdentityProvider {
        fn signed_in(email: &str) -> Self {
            Self {
                identity: Some(Identity::new("user-1", email, None)),
                force_error: None,
            }
        }

        fn anonymous() -> Self {
            Self {
                identity: None,
                force_error: None,
            }
        }

        fn failing(error: AuthError) -> Self {
            Self {
                identity: None,
                force_error: Some(error),
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for MockIdentityProvider {
        async fn current_identity(
            &self,
            _token: Option<&str>,
        ) -> Result<Option<Identity>, AuthError> {
            if let Some(err) = &self.force_error {
                return Err(err.clone());
            }
            Ok(self.identity.clone())
        }
    }

    struct CountingStore {
        records: Mutex<HashMap<String, EntitlementRecord>>,
        calls: AtomicU32,
        fail: bool,
    }

    impl CountingStore {
        fn empty() -> Self {
            Self {
                records: Mutex::new(HashMap::new()),
                calls: AtomicU32::new(0),
                fail: false,
            }
        }

        fn with_flag(email: &str, flag: PlanFlag) -> Self {
            let store = Self::empty();
            store.records.lock().unwrap().insert(
                email.to_string(),
                EntitlementRecord {
                    id: Uuid::new_v4(),
                    email: email.to_string(),
                    nome: None,
                    plano_ativo: flag,
                    created_at: Timestamp::now(),
                    updated_at: Timestamp::now(),
                },
            );
            store
        }

        fn failing() -> Self {
            let mut store = Self::empty();
            store.fail = true;
            store
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EntitlementStore for CountingStore {
        async fn find_by_email(
            &self,
            email: &str,
        ) -> Result<Option<EntitlementRecord>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DomainError::database("simulated store failure"));
            }
            Ok(self.records.lock().unwrap().get(email).cloned())
        }

        async fn set_active(
            &self,
            _email: &str,
            _active: bool,
        ) -> Result<Option<EntitlementRecord>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            unimplemented!("the gate never writes")
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserNotifier for RecordingNotifier {
        async fn notify_access_denied(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn destinations() -> GateDestinations {
        GateDestinations {
            sign_in: "/login".to_string(),
            subscription_offer: "/assinatura".to_string(),
        }
    }

    fn gate(
        identity: MockIdentityProvider,
        store: Arc<CountingStore>,
        notifier: Arc<RecordingNotifier>,
    ) -> EntitlementGate {
        EntitlementGate::new(Arc::new(identity), store, notifier, destinations())
    }

    // ══════════════════════════════════════════════════════════════
    // Scenarios
    // ══════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn sim_flag_grants_access_without_redirect() {
        let store = Arc::new(CountingStore::with_flag(
            "ana@example.com",
            PlanFlag::Text("sim".into()),
        ));
        let notifier = Arc::new(RecordingNotifier::default());

        let decision = gate(
            MockIdentityProvider::signed_in("ana@example.com"),
            store,
            notifier.clone(),
        )
        .check(Some("token"))
        .await;

        assert!(decision.is_granted());
        assert_eq!(decision.redirect_destination(), None);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn bool_true_flag_grants_access() {
        let store = Arc::new(CountingStore::with_flag(
            "ana@example.com",
            PlanFlag::Bool(true),
        ));

        let decision = gate(
            MockIdentityProvider::signed_in("ana@example.com"),
            store,
            Arc::new(RecordingNotifier::default()),
        )
        .check(Some("token"))
        .await;

        assert!(decision.is_granted());
    }

    #[tokio::test]
    async fn inactive_flag_redirects_to_offer_and_notifies() {
        let store = Arc::new(CountingStore::with_flag(
            "ana@example.com",
            PlanFlag::Bool(false),
        ));
        let notifier = Arc::new(RecordingNotifier::default());

        let decision = gate(
            MockIdentityProvider::signed_in("ana@example.com"),
            store,
            notifier.clone(),
        )
        .check(Some("token"))
        .await;

        assert_eq!(decision.redirect_destination(), Some("/assinatura"));
        assert_eq!(notifier.messages(), vec![DENIAL_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn anonymous_caller_redirects_to_sign_in_without_store_access() {
        let store = Arc::new(CountingStore::empty());

        let decision = gate(
            MockIdentityProvider::anonymous(),
            store.clone(),
            Arc::new(RecordingNotifier::default()),
        )
        .check(None)
        .await;

        assert_eq!(decision.redirect_destination(), Some("/login"));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn unresolvable_session_is_treated_as_unauthenticated() {
        let store = Arc::new(CountingStore::empty());

        let decision = gate(
            MockIdentityProvider::failing(AuthError::ServiceUnavailable("down".into())),
            store.clone(),
            Arc::new(RecordingNotifier::default()),
        )
        .check(Some("token"))
        .await;

        assert_eq!(decision.redirect_destination(), Some("/login"));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn missing_record_fails_closed() {
        let store = Arc::new(CountingStore::empty());

        let decision = gate(
            MockIdentityProvider::signed_in("ana@example.com"),
            store,
            Arc::new(RecordingNotifier::default()),
        )
        .check(Some("token"))
        .await;

        assert_eq!(decision.redirect_destination(), Some("/assinatura"));
    }

    #[tokio::test]
    async fn store_failure_fails_closed() {
        let store = Arc::new(CountingStore::failing());

        let decision = gate(
            MockIdentityProvider::signed_in("ana@example.com"),
            store,
            Arc::new(RecordingNotifier::default()),
        )
        .check(Some("token"))
        .await;

        assert!(!decision.is_granted());
        assert_eq!(decision.redirect_destination(), Some("/assinatura"));
    }

    #[tokio::test]
    async fn completed_decision_reports_not_checking() {
        let store = Arc::new(CountingStore::with_flag(
            "ana@example.com",
            PlanFlag::Text("sim".into()),
        ));

        let decision = gate(
            MockIdentityProvider::signed_in("ana@example.com"),
            store,
            Arc::new(RecordingNotifier::default()),
        )
        .check(Some("token"))
        .await;

        let status = decision.status();
        assert!(!status.checking);
        assert!(status.entitled);
    }
}
