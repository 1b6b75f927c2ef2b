//! Object storage capability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A stored asset as reported by the object storage backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredAsset {
    /// Stable storage key for the asset.
    pub key: String,
    /// Durable URL serving the asset bytes.
    pub url: String,
    /// MIME type recorded at upload time.
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

/// Capability for the hosted object storage service.
///
/// The image URL cache is a client-side memoization layer over
/// `resolve_url`; it never uploads or downloads bytes itself.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Uploads `bytes` under a fresh storage key and returns the stored
    /// asset, including its durable URL.
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<StoredAsset>;

    /// Uploads `bytes` under a caller-chosen key, replacing any existing
    /// asset. Used for the fixed site asset keys (favicon, hero banner).
    async fn upload_with_key(
        &self,
        key: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredAsset>;

    /// Resolves a storage key to a servable URL.
    async fn resolve_url(&self, key: &str) -> Result<String>;

    /// Removes the asset for `key`. Removing a missing key is an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
