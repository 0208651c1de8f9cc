//! User notification port.

use async_trait::async_trait;

/// Best-effort, non-blocking user notification (toast-equivalent).
///
/// The gate uses this to tell a signed-in user why access was denied.
/// Implementations must not fail the gate check: there is no error channel.
#[async_trait]
pub trait UserNotifier: Send + Sync {
    /// Notify the user that access to protected content was denied.
    async fn notify_access_denied(&self, message: &str);
}
