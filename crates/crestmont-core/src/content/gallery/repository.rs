//! Gallery repository trait.

use async_trait::async_trait;

use super::model::GalleryImage;
use crate::error::Result;

/// Repository for gallery image records.
#[async_trait]
pub trait GalleryRepository: Send + Sync {
    /// Lists all images: manually ordered first, then newest upload first.
    async fn list_all(&self) -> Result<Vec<GalleryImage>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<GalleryImage>>;

    async fn save(&self, image: &GalleryImage) -> Result<()>;

    async fn delete(&self, id: &str) -> Result<()>;
}
