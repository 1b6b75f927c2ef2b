//! Hosted auth service gateway.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crestmont_core::auth::{AdminSession, AuthGateway};
use crestmont_core::error::{CrestmontError, Result};

use super::client::HostedClient;

const SESSIONS_PATH: &str = "/v1/auth/sessions";
const CURRENT_SESSION_PATH: &str = "/v1/auth/sessions/current";

/// Session document returned by the auth service.
#[derive(Debug, Deserialize)]
struct SessionDocument {
    user_id: String,
    email: String,
    #[serde(default)]
    display_name: String,
    expires_at: DateTime<Utc>,
    /// Present on sign-in responses only.
    #[serde(default)]
    token: Option<String>,
}

impl From<SessionDocument> for AdminSession {
    fn from(doc: SessionDocument) -> Self {
        Self {
            user_id: doc.user_id,
            email: doc.email,
            display_name: doc.display_name,
            expires_at: doc.expires_at,
        }
    }
}

/// [`AuthGateway`] implementation over the hosted auth service.
///
/// Sign-in stores the issued session token on the shared client so the
/// document and storage clients act on behalf of the signed-in admin.
pub struct RemoteAuthGateway {
    client: Arc<HostedClient>,
}

impl RemoteAuthGateway {
    pub fn new(client: Arc<HostedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for RemoteAuthGateway {
    async fn current_session(&self) -> Result<Option<AdminSession>> {
        match self.client.get_json(CURRENT_SESSION_PATH).await {
            Ok(Some(value)) => {
                let doc: SessionDocument = serde_json::from_value(value)?;
                Ok(Some(doc.into()))
            }
            Ok(None) => Ok(None),
            // No or stale token reads as "nobody signed in", not a failure.
            Err(CrestmontError::Auth(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminSession> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });
        let value = self.client.post_json(SESSIONS_PATH, &body).await?;
        let doc: SessionDocument = serde_json::from_value(value)?;
        let token = doc
            .token
            .clone()
            .ok_or_else(|| CrestmontError::auth("sign-in response carried no session token"))?;
        self.client.set_session_token(Some(token));
        Ok(doc.into())
    }

    async fn sign_out(&self) -> Result<()> {
        // 404 means the session already expired server-side; either way the
        // local token is gone afterwards.
        let result = self.client.delete(CURRENT_SESSION_PATH).await;
        self.client.set_session_token(None);
        result.map(|_| ())
    }
}
