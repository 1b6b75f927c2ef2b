//! Hosted object storage client.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crestmont_core::error::{CrestmontError, Result};
use crestmont_core::storage::{ObjectStore, StoredAsset};

use super::client::HostedClient;

/// File metadata document returned by the storage service.
#[derive(Debug, Deserialize)]
struct FileDocument {
    key: String,
    mime_type: String,
    size: u64,
}

/// [`ObjectStore`] implementation over the hosted storage service.
///
/// Uploads go up as multipart requests; the durable URL is the bucket view
/// URL for the key the service assigned.
pub struct RemoteObjectStore {
    client: Arc<HostedClient>,
    bucket_id: String,
}

impl RemoteObjectStore {
    pub fn new(client: Arc<HostedClient>, bucket_id: impl Into<String>) -> Self {
        Self {
            client,
            bucket_id: bucket_id.into(),
        }
    }

    fn files_path(&self) -> String {
        format!("/v1/storage/buckets/{}/files", self.bucket_id)
    }

    fn file_path(&self, key: &str) -> String {
        format!("{}/{}", self.files_path(), key)
    }

    fn view_url(&self, key: &str) -> String {
        format!("{}{}/view", self.client.endpoint(), self.file_path(key))
    }

    fn file_part(file_name: &str, bytes: Vec<u8>) -> Result<reqwest::multipart::Form> {
        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime.essence_str())
            .map_err(|e| CrestmontError::internal(format!("invalid MIME type: {}", e)))?;
        Ok(reqwest::multipart::Form::new().part("file", part))
    }

    fn asset_from(&self, doc: FileDocument) -> StoredAsset {
        StoredAsset {
            url: self.view_url(&doc.key),
            key: doc.key,
            mime_type: doc.mime_type,
            size: doc.size,
        }
    }
}

#[async_trait]
impl ObjectStore for RemoteObjectStore {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<StoredAsset> {
        let form = Self::file_part(file_name, bytes)?;
        let value = self.client.post_multipart(&self.files_path(), form).await?;
        let doc: FileDocument = serde_json::from_value(value)?;
        Ok(self.asset_from(doc))
    }

    async fn upload_with_key(
        &self,
        key: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredAsset> {
        let form = Self::file_part(file_name, bytes)?;
        let value = self.client.put_multipart(&self.file_path(key), form).await?;
        let doc: FileDocument = serde_json::from_value(value)?;
        Ok(self.asset_from(doc))
    }

    async fn resolve_url(&self, key: &str) -> Result<String> {
        // Confirm the file still exists before handing out a view URL.
        match self.client.get_json(&self.file_path(key)).await? {
            Some(_) => Ok(self.view_url(key)),
            None => Err(CrestmontError::not_found("stored_asset", key)),
        }
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if !self.client.delete(&self.file_path(key)).await? {
            return Err(CrestmontError::not_found("stored_asset", key));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crestmont_core::config::{BackendConfig, BackendCredentials};

    fn store() -> RemoteObjectStore {
        let backend = BackendConfig {
            endpoint: "https://backend.example.com".to_string(),
            project_id: "crestmont".to_string(),
            database_id: "site".to_string(),
            bucket_id: "media".to_string(),
        };
        let credentials = BackendCredentials {
            api_key: "server-key".to_string(),
        };
        let client = Arc::new(HostedClient::new(&backend, &credentials).unwrap());
        RemoteObjectStore::new(client, "media")
    }

    #[test]
    fn test_view_url_shape() {
        let store = store();
        assert_eq!(
            store.view_url("abc-123"),
            "https://backend.example.com/v1/storage/buckets/media/files/abc-123/view"
        );
    }
}
