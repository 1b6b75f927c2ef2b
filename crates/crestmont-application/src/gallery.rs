//! Gallery use case: uploads to object storage plus the client-side URL
//! cache.

use std::sync::Arc;

use chrono::Utc;

use crestmont_core::content::gallery::{GalleryImage, GalleryRepository};
use crestmont_core::error::{CrestmontError, Result};
use crestmont_core::storage::ObjectStore;
use crestmont_core::store::ImageCache;

use crate::content::require_non_empty;

pub struct GalleryUseCase {
    repository: Arc<dyn GalleryRepository>,
    objects: Arc<dyn ObjectStore>,
    images: ImageCache,
}

impl GalleryUseCase {
    pub fn new(
        repository: Arc<dyn GalleryRepository>,
        objects: Arc<dyn ObjectStore>,
        images: ImageCache,
    ) -> Self {
        Self {
            repository,
            objects,
            images,
        }
    }

    /// Uploads image bytes, persists the gallery record, and seeds the URL
    /// cache through the ticketed resolve path.
    pub async fn upload(
        &self,
        caption: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<GalleryImage> {
        require_non_empty(caption, "caption")?;
        if bytes.is_empty() {
            return Err(CrestmontError::validation("image file is empty"));
        }

        let asset = self.objects.upload(file_name, bytes).await?;
        let image = GalleryImage::from_asset(caption, &asset, Utc::now());
        self.repository.save(&image).await?;

        // The upload response carries the fresh URL; a direct set also
        // supersedes any resolve still in flight for this key.
        self.images.set_image(&image.image_key, &asset.url);
        tracing::info!(id = %image.id, key = %image.image_key, "Gallery image uploaded");
        Ok(image)
    }

    /// Removes the record, the stored bytes, and nothing else; the cache
    /// entry ages out on the next batch hydration.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let image = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CrestmontError::not_found("gallery_image", id))?;

        if let Err(err) = self.objects.remove(&image.image_key).await
            && !err.is_not_found()
        {
            return Err(err);
        }
        self.repository.delete(id).await?;
        tracing::info!(id = %id, key = %image.image_key, "Gallery image removed");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<GalleryImage>> {
        self.repository.list_all().await
    }

    /// Re-resolves the URL of every gallery record into the cache. Stale
    /// completions (superseded while a fetch was in flight) are discarded.
    /// Returns the number of entries applied.
    pub async fn refresh_urls(&self) -> Result<usize> {
        let images = self.repository.list_all().await?;
        let mut applied = 0;
        for image in &images {
            let ticket = self.images.begin_resolve(&image.image_key);
            let url = self.objects.resolve_url(&image.image_key).await?;
            if self.images.complete_resolve(&ticket, url) {
                applied += 1;
            } else {
                tracing::debug!(key = %image.image_key, "Discarded stale URL resolution");
            }
        }
        Ok(applied)
    }
}
