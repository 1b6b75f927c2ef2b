//! HTTP client for the hosted backend service.

use std::sync::RwLock;

use crestmont_core::config::{BackendConfig, BackendCredentials};
use crestmont_core::error::{CrestmontError, Result};
use reqwest::{RequestBuilder, Response, StatusCode};

/// Project id header sent with every request.
const HEADER_PROJECT: &str = "X-Crestmont-Project";
/// Server API key header sent with every request.
const HEADER_KEY: &str = "X-Crestmont-Key";
/// Session token header, present after a sign-in.
const HEADER_SESSION: &str = "X-Crestmont-Session";

/// Shared HTTP client for the hosted backend.
///
/// Construction fails fast when the endpoint, project id or API key is
/// missing: there is no half-initialized client for callers to forget to
/// check. The session token is filled in by the auth gateway after sign-in
/// and travels with every subsequent request.
pub struct HostedClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    api_key: String,
    session_token: RwLock<Option<String>>,
}

impl std::fmt::Debug for HostedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedClient")
            .field("endpoint", &self.endpoint)
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

impl HostedClient {
    pub fn new(backend: &BackendConfig, credentials: &BackendCredentials) -> Result<Self> {
        if backend.endpoint.trim().is_empty() {
            return Err(CrestmontError::config("backend endpoint is not configured"));
        }
        if backend.project_id.trim().is_empty() {
            return Err(CrestmontError::config("backend project id is not configured"));
        }
        if credentials.api_key.trim().is_empty() {
            return Err(CrestmontError::config(
                "backend API key is missing; fill in secret.json or set CRESTMONT_API_KEY",
            ));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: backend.endpoint.trim_end_matches('/').to_string(),
            project_id: backend.project_id.clone(),
            api_key: credentials.api_key.clone(),
            session_token: RwLock::new(None),
        })
    }

    /// Base endpoint without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    pub(crate) fn set_session_token(&self, token: Option<String>) {
        let mut lock = self.session_token.write().unwrap_or_else(|e| e.into_inner());
        *lock = token;
    }

    fn apply_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header(HEADER_PROJECT, &self.project_id)
            .header(HEADER_KEY, &self.api_key);
        let token = self
            .session_token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        match token {
            Some(token) => builder.header(HEADER_SESSION, token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        builder
            .send()
            .await
            .map_err(|e| CrestmontError::backend(format!("request failed: {}", e)))
    }

    async fn read_json(&self, response: Response) -> Result<serde_json::Value> {
        response
            .json()
            .await
            .map_err(|e| CrestmontError::backend(format!("invalid response body: {}", e)))
    }

    async fn error_for_status(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = format!("backend returned {}: {}", status, body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(CrestmontError::auth(message)),
            _ => Err(CrestmontError::backend(message)),
        }
    }

    /// GET returning the JSON body, or `None` on 404.
    pub(crate) async fn get_json(&self, path: &str) -> Result<Option<serde_json::Value>> {
        let response = self
            .send(self.apply_headers(self.http.get(self.url(path))))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = self.error_for_status(response).await?;
        Ok(Some(self.read_json(response).await?))
    }

    pub(crate) async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let response = self
            .send(self.apply_headers(self.http.post(self.url(path)).json(body)))
            .await?;
        let response = self.error_for_status(response).await?;
        self.read_json(response).await
    }

    pub(crate) async fn put_json(&self, path: &str, body: &serde_json::Value) -> Result<()> {
        let response = self
            .send(self.apply_headers(self.http.put(self.url(path)).json(body)))
            .await?;
        self.error_for_status(response).await?;
        Ok(())
    }

    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<serde_json::Value> {
        let response = self
            .send(self.apply_headers(self.http.post(self.url(path)).multipart(form)))
            .await?;
        let response = self.error_for_status(response).await?;
        self.read_json(response).await
    }

    pub(crate) async fn put_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<serde_json::Value> {
        let response = self
            .send(self.apply_headers(self.http.put(self.url(path)).multipart(form)))
            .await?;
        let response = self.error_for_status(response).await?;
        self.read_json(response).await
    }

    /// DELETE returning `false` on 404.
    pub(crate) async fn delete(&self, path: &str) -> Result<bool> {
        let response = self
            .send(self.apply_headers(self.http.delete(self.url(path))))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        self.error_for_status(response).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> BackendConfig {
        BackendConfig {
            endpoint: "https://backend.example.com/".to_string(),
            project_id: "crestmont".to_string(),
            database_id: "site".to_string(),
            bucket_id: "media".to_string(),
        }
    }

    fn credentials() -> BackendCredentials {
        BackendCredentials {
            api_key: "server-key".to_string(),
        }
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HostedClient::new(&backend(), &credentials()).unwrap();
        assert_eq!(client.endpoint(), "https://backend.example.com");
        assert_eq!(
            client.url("/v1/auth/sessions"),
            "https://backend.example.com/v1/auth/sessions"
        );
    }

    #[test]
    fn test_missing_endpoint_fails_fast() {
        let mut config = backend();
        config.endpoint = String::new();
        let err = HostedClient::new(&config, &credentials()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        let err = HostedClient::new(&backend(), &BackendCredentials::default()).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("CRESTMONT_API_KEY"));
    }
}
