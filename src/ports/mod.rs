//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! entitlement core and the outside world. Adapters implement these ports.
//!
//! - `EntitlementStore` - read and write the per-email plan flag
//! - `IdentityProvider` - resolve the caller's session into an identity
//! - `UserNotifier` - best-effort denial notification (toast-equivalent)

mod entitlement_store;
mod identity_provider;
mod notifier;

pub use entitlement_store::EntitlementStore;
pub use identity_provider::IdentityProvider;
pub use notifier::UserNotifier;
