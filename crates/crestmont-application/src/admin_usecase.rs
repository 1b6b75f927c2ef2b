//! Admin session use case.
//!
//! Wraps the auth gateway with input validation, logging and the admin route
//! guard. The guard decision is computed here so pages only deal with
//! "render or redirect".

use std::sync::Arc;

use chrono::Utc;

use crestmont_core::auth::{AdminGate, AdminSession, AuthGateway, GateOutcome};
use crestmont_core::error::{CrestmontError, Result};

pub struct AdminUseCase {
    auth: Arc<dyn AuthGateway>,
    gate: AdminGate,
}

impl AdminUseCase {
    pub fn new(auth: Arc<dyn AuthGateway>, gate: AdminGate) -> Self {
        Self { auth, gate }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AdminSession> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(CrestmontError::validation("email and password are required"));
        }
        let session = self.auth.sign_in(email, password).await?;
        tracing::info!(user_id = %session.user_id, "Admin signed in");
        Ok(session)
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.auth.sign_out().await?;
        tracing::info!("Admin signed out");
        Ok(())
    }

    pub async fn current_session(&self) -> Result<Option<AdminSession>> {
        self.auth.current_session().await
    }

    /// Guard for protected admin routes: admit a live session, otherwise
    /// redirect to the login path.
    pub async fn require_admin(&self) -> Result<GateOutcome> {
        let session = self.auth.current_session().await?;
        let outcome = self.gate.check(session.as_ref(), Utc::now());
        if let GateOutcome::Redirect(ref target) = outcome {
            tracing::debug!(target = %target, "Unauthenticated admin request redirected");
        }
        Ok(outcome)
    }
}
