//! Site asset hydration.
//!
//! The fixed site images (favicon, hero banner, campus aerial) live in
//! object storage under stable logical keys. This use case fills the image
//! URL cache for them: a batch hydration at startup and ticketed per-key
//! refreshes afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use crestmont_core::error::Result;
use crestmont_core::storage::ObjectStore;
use crestmont_core::store::ImageCache;

/// Logical keys of the fixed site assets.
pub const SITE_ASSET_KEYS: [&str; 3] = ["favicon", "hero-banner", "campus-aerial"];

pub struct SiteAssetsUseCase {
    objects: Arc<dyn ObjectStore>,
    images: ImageCache,
    keys: Vec<String>,
}

impl SiteAssetsUseCase {
    pub fn new(objects: Arc<dyn ObjectStore>, images: ImageCache) -> Self {
        Self::with_keys(objects, images, SITE_ASSET_KEYS.iter().map(|k| k.to_string()))
    }

    pub fn with_keys(
        objects: Arc<dyn ObjectStore>,
        images: ImageCache,
        keys: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            objects,
            images,
            keys: keys.into_iter().collect(),
        }
    }

    /// Resolves every site asset and replaces the cache contents with the
    /// complete mapping. Assets not uploaded yet are skipped; the rendering
    /// layer falls back to placeholders for missing keys.
    pub async fn hydrate(&self) -> Result<()> {
        let mut mapping = HashMap::new();
        for key in &self.keys {
            match self.objects.resolve_url(key).await {
                Ok(url) => {
                    mapping.insert(key.clone(), url);
                }
                Err(err) if err.is_not_found() => {
                    tracing::debug!(key = %key, "Site asset not uploaded yet");
                }
                Err(err) => return Err(err),
            }
        }
        tracing::info!(resolved = mapping.len(), "Hydrated site asset URLs");
        self.images.set_images(mapping);
        Ok(())
    }

    /// Re-resolves one asset through the ticketed path. Returns `false` when
    /// the completion was superseded while the fetch was in flight.
    pub async fn refresh(&self, key: &str) -> Result<bool> {
        let ticket = self.images.begin_resolve(key);
        let url = self.objects.resolve_url(key).await?;
        let applied = self.images.complete_resolve(&ticket, url);
        if !applied {
            tracing::debug!(key = %key, "Discarded stale URL resolution");
        }
        Ok(applied)
    }

    /// Uploads or replaces a site asset under its logical key and updates
    /// the cache with the fresh URL.
    pub async fn set_asset(&self, key: &str, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        let asset = self.objects.upload_with_key(key, file_name, bytes).await?;
        self.images.set_image(key, &asset.url);
        tracing::info!(key = %key, "Site asset replaced");
        Ok(asset.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crestmont_infrastructure::memory::MemoryObjectStore;

    fn usecase() -> (SiteAssetsUseCase, Arc<MemoryObjectStore>, ImageCache) {
        let objects = Arc::new(MemoryObjectStore::new());
        let images = ImageCache::new();
        let usecase = SiteAssetsUseCase::new(objects.clone(), images.clone());
        (usecase, objects, images)
    }

    #[tokio::test]
    async fn test_hydrate_skips_missing_assets() {
        let (assets, objects, images) = usecase();
        objects
            .upload_with_key("favicon", "favicon.ico", vec![1])
            .await
            .unwrap();

        assets.hydrate().await.unwrap();
        assert!(images.get("favicon").is_some());
        // Not uploaded: absent, so the UI renders its placeholder.
        assert!(images.get("hero-banner").is_none());
    }

    #[tokio::test]
    async fn test_hydrate_replaces_previous_contents() {
        let (assets, _, images) = usecase();
        images.set_image("stray-key", "/old.png");

        assets.hydrate().await.unwrap();
        assert!(images.get("stray-key").is_none());
    }

    #[tokio::test]
    async fn test_set_asset_updates_cache_immediately() {
        let (assets, _, images) = usecase();
        let url = assets
            .set_asset("hero-banner", "banner.jpg", vec![1, 2])
            .await
            .unwrap();
        assert_eq!(images.get("hero-banner"), Some(url));
    }

    #[tokio::test]
    async fn test_refresh_applies_latest_resolution() {
        let (assets, objects, images) = usecase();
        objects
            .upload_with_key("favicon", "favicon.ico", vec![1])
            .await
            .unwrap();
        assert!(assets.refresh("favicon").await.unwrap());
        assert!(images.get("favicon").is_some());
    }
}
