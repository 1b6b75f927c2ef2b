//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` and the backend
//! credentials from `secret.json`, with environment-variable overrides for
//! containerized deployments.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crestmont_core::config::{BackendConfig, BackendCredentials, RootConfig};
use crestmont_core::error::{CrestmontError, Result};

use crate::paths::CrestmontPaths;

/// Environment override for the backend endpoint.
pub const ENV_BACKEND_ENDPOINT: &str = "CRESTMONT_BACKEND_ENDPOINT";
/// Environment override for the backend API key.
pub const ENV_API_KEY: &str = "CRESTMONT_API_KEY";

/// Configuration service that loads and caches the root configuration.
///
/// Reads `config.toml` on first access and caches the result to avoid
/// repeated file I/O. A missing or unreadable config file yields the default
/// configuration; a present-but-invalid file is reported.
#[derive(Debug, Clone)]
pub struct ConfigService {
    base_dir: Option<PathBuf>,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service resolving paths under the platform config dir.
    pub fn new() -> Self {
        Self {
            base_dir: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service rooted at a custom directory (for testing).
    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: Some(base_dir.as_ref().to_path_buf()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    fn paths(&self) -> CrestmontPaths {
        CrestmontPaths::new(self.base_dir.as_deref())
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> RootConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = match self.load_config() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to load config, using defaults: {}", err);
                RootConfig::default()
            }
        };

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Returns the backend settings with environment overrides applied.
    pub fn backend_config(&self) -> BackendConfig {
        let mut backend = self.get_config().backend;
        if let Ok(endpoint) = std::env::var(ENV_BACKEND_ENDPOINT)
            && !endpoint.trim().is_empty()
        {
            backend.endpoint = endpoint;
        }
        backend
    }

    /// Loads the backend credentials from `secret.json`, creating a blank
    /// template on first run. `CRESTMONT_API_KEY` overrides the file value.
    pub fn load_credentials(&self) -> Result<BackendCredentials> {
        let mut credentials = self.load_credentials_from_file()?;
        if let Ok(api_key) = std::env::var(ENV_API_KEY)
            && !api_key.trim().is_empty()
        {
            credentials.api_key = api_key;
        }
        Ok(credentials)
    }

    fn load_credentials_from_file(&self) -> Result<BackendCredentials> {
        let secret_path = self.paths().ensure_secret_file()?;
        let content = std::fs::read_to_string(&secret_path)?;
        if content.trim().is_empty() {
            return Ok(BackendCredentials::default());
        }
        let credentials: BackendCredentials = serde_json::from_str(&content)?;
        Ok(credentials)
    }

    fn load_config(&self) -> Result<RootConfig> {
        let config_path = self
            .paths()
            .config_file()
            .map_err(|e| CrestmontError::config(e.to_string()))?;
        if !config_path.exists() {
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        if content.trim().is_empty() {
            return Ok(RootConfig::default());
        }

        let config: RootConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_base_dir(temp_dir.path());
        let config = service.get_config();
        assert_eq!(config.site.site_name, "Crestmont College");
        assert!(config.backend.endpoint.is_empty());
    }

    #[test]
    fn test_config_file_is_loaded_and_cached() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[site]
site_name = "Crestmont College"
admin_login_path = "/admin/login"

[backend]
endpoint = "https://backend.example.com"
project_id = "crestmont"
database_id = "site"
bucket_id = "media"
"#,
        )
        .unwrap();

        let service = ConfigService::with_base_dir(temp_dir.path());
        assert_eq!(service.get_config().backend.project_id, "crestmont");

        // Cached: rewriting the file without invalidation changes nothing.
        std::fs::write(&config_path, "").unwrap();
        assert_eq!(service.get_config().backend.project_id, "crestmont");

        service.invalidate_cache();
        assert!(service.get_config().backend.project_id.is_empty());
    }

    #[test]
    fn test_load_credentials_creates_template() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_base_dir(temp_dir.path());
        let credentials = service.load_credentials().unwrap();
        assert!(credentials.api_key.is_empty());
        assert!(temp_dir.path().join("secret.json").exists());
    }

    #[test]
    fn test_load_credentials_reads_existing_key() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("secret.json"),
            r#"{"api_key":"server-key-1"}"#,
        )
        .unwrap();
        let service = ConfigService::with_base_dir(temp_dir.path());
        let credentials = service.load_credentials().unwrap();
        assert_eq!(credentials.api_key, "server-key-1");
    }
}
