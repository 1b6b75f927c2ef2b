//! Session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated admin session issued by the hosted auth service.
///
/// The backend owns the full session shape; this is the subset the site core
/// consumes. `expires_at` comes from the backend and is compared against the
/// caller-supplied clock so the gate stays deterministic in tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminSession {
    /// Backend user identifier.
    pub user_id: String,
    /// Email the admin signed in with.
    pub email: String,
    /// Display name shown in the admin panel header.
    pub display_name: String,
    /// Expiry timestamp issued by the backend.
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
