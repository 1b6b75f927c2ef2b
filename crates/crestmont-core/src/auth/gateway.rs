//! Auth capability trait.

use async_trait::async_trait;

use crate::auth::model::AdminSession;
use crate::error::Result;

/// Capability for the hosted authentication service.
///
/// Implementations hold whatever transport state the backend needs (tokens,
/// cookies); callers only see sessions.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Returns the current session, or `None` when nobody is signed in.
    async fn current_session(&self) -> Result<Option<AdminSession>>;

    /// Signs in with email/password credentials.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminSession>;

    /// Ends the current session. Signing out without a session is a no-op.
    async fn sign_out(&self) -> Result<()>;
}
