//! Admin route guard.

use chrono::{DateTime, Utc};

use crate::auth::model::AdminSession;

/// Decision for a request against a protected admin route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Viewer holds a live session; render the admin page.
    Admitted,
    /// No live session; send the viewer to the contained login path.
    Redirect(String),
}

/// Pure guard for protected admin routes.
///
/// Unauthenticated or expired viewers are redirected to the login path; the
/// gate itself performs no I/O.
#[derive(Debug, Clone)]
pub struct AdminGate {
    login_path: String,
}

impl AdminGate {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn check(&self, session: Option<&AdminSession>, now: DateTime<Utc>) -> GateOutcome {
        match session {
            Some(session) if !session.is_expired(now) => GateOutcome::Admitted,
            _ => GateOutcome::Redirect(self.login_path.clone()),
        }
    }
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new("/admin/login")
    }
}
