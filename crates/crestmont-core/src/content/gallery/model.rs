//! Gallery domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::StoredAsset;

/// A gallery image record. The bytes live in object storage; this record
/// carries the storage key plus the metadata shown in the gallery grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImage {
    /// Unique identifier (UUID).
    pub id: String,
    pub caption: String,
    /// Storage key of the image asset.
    pub image_key: String,
    /// MIME type recorded at upload time.
    pub mime_type: String,
    /// File size in bytes.
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    /// Manual sort order (optional; unsorted images follow sorted ones).
    pub sort_order: Option<i32>,
}

impl GalleryImage {
    /// Creates a record for a freshly uploaded asset.
    pub fn from_asset(caption: impl Into<String>, asset: &StoredAsset, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            caption: caption.into(),
            image_key: asset.key.clone(),
            mime_type: asset.mime_type.clone(),
            size: asset.size,
            uploaded_at: now,
            sort_order: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_asset_copies_storage_fields() {
        let asset = StoredAsset {
            key: "media/abc".to_string(),
            url: "https://cdn.example.com/media/abc".to_string(),
            mime_type: "image/png".to_string(),
            size: 2048,
        };
        let image = GalleryImage::from_asset("Quad in autumn", &asset, Utc::now());
        assert_eq!(image.image_key, "media/abc");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.size, 2048);
        assert!(image.sort_order.is_none());
    }
}
