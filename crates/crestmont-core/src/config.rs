//! Configuration types for the site core.

use serde::{Deserialize, Serialize};

/// Root configuration stored in `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RootConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Site-level settings.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SiteConfig {
    /// Display name used in logs and admin headers.
    pub site_name: String,
    /// Path unauthenticated admin viewers are redirected to.
    pub admin_login_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Crestmont College".to_string(),
            admin_login_path: "/admin/login".to_string(),
        }
    }
}

/// Connection settings for the hosted backend service.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct BackendConfig {
    /// Base endpoint, e.g. `https://backend.example.com`.
    pub endpoint: String,
    /// Project identifier sent with every request.
    pub project_id: String,
    /// Document database identifier.
    pub database_id: String,
    /// Object storage bucket identifier.
    pub bucket_id: String,
}

/// Secret credentials stored in `secret.json`, separate from `config.toml`
/// so the config file can be checked into dotfiles without leaking keys.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct BackendCredentials {
    /// Server API key for the hosted backend.
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_config() {
        let site = SiteConfig::default();
        assert_eq!(site.site_name, "Crestmont College");
        assert_eq!(site.admin_login_path, "/admin/login");
    }

    #[test]
    fn test_root_config_roundtrip() {
        let config = RootConfig {
            site: SiteConfig::default(),
            backend: BackendConfig {
                endpoint: "https://backend.example.com".to_string(),
                project_id: "crestmont".to_string(),
                database_id: "site".to_string(),
                bucket_id: "media".to_string(),
            },
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: RootConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.backend.project_id, "crestmont");
        assert_eq!(parsed.backend.bucket_id, "media");
    }
}
