//! In-memory capability implementations.
//!
//! Behaviorally equivalent stand-ins for the hosted backend, used by tests
//! and local development. Same ordering and not-found semantics as the
//! remote implementations.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crestmont_core::auth::{AdminSession, AuthGateway};
use crestmont_core::content::campus::{CampusRepository, CampusSection};
use crestmont_core::content::careers::{JobPosting, JobRepository};
use crestmont_core::content::channel::{ChannelRepository, HomepageChannel};
use crestmont_core::content::gallery::{GalleryImage, GalleryRepository};
use crestmont_core::content::news::{NewsPost, NewsRepository};
use crestmont_core::content::programs::{AcademicProgram, ProgramRepository};
use crestmont_core::error::{CrestmontError, Result};
use crestmont_core::storage::{ObjectStore, StoredAsset};

// ============================================================================
// Auth
// ============================================================================

struct MemoryAccount {
    password: String,
    display_name: String,
}

/// In-memory [`AuthGateway`] with a fixed account list.
pub struct MemoryAuthGateway {
    accounts: HashMap<String, MemoryAccount>,
    session: RwLock<Option<AdminSession>>,
    session_ttl: Duration,
}

impl MemoryAuthGateway {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            session: RwLock::new(None),
            session_ttl: Duration::hours(8),
        }
    }

    pub fn with_account(
        mut self,
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        self.accounts.insert(
            email.into(),
            MemoryAccount {
                password: password.into(),
                display_name: display_name.into(),
            },
        );
        self
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }
}

impl Default for MemoryAuthGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthGateway for MemoryAuthGateway {
    async fn current_session(&self) -> Result<Option<AdminSession>> {
        Ok(self.session.read().await.clone())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminSession> {
        let account = self
            .accounts
            .get(email)
            .filter(|account| account.password == password)
            .ok_or_else(|| CrestmontError::auth("invalid email or password"))?;

        let session = AdminSession {
            user_id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            display_name: account.display_name.clone(),
            expires_at: Utc::now() + self.session_ttl,
        };
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        *self.session.write().await = None;
        Ok(())
    }
}

// ============================================================================
// Object storage
// ============================================================================

/// In-memory [`ObjectStore`] handing out `memory://` URLs.
pub struct MemoryObjectStore {
    objects: RwLock<HashMap<String, StoredAsset>>,
    counter: AtomicU64,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            counter: AtomicU64::new(1),
        }
    }

    /// Whether an asset for `key` is held.
    pub async fn contains(&self, key: &str) -> bool {
        self.objects.read().await.contains_key(key)
    }

    fn asset_for(key: &str, file_name: &str, bytes: &[u8]) -> StoredAsset {
        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        StoredAsset {
            url: format!("memory://media/{}", key),
            key: key.to_string(),
            mime_type: mime.essence_str().to_string(),
            size: bytes.len() as u64,
        }
    }
}

impl Default for MemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<StoredAsset> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let key = format!("asset-{:04}", n);
        let asset = Self::asset_for(&key, file_name, &bytes);
        self.objects.write().await.insert(key, asset.clone());
        Ok(asset)
    }

    async fn upload_with_key(
        &self,
        key: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredAsset> {
        let asset = Self::asset_for(key, file_name, &bytes);
        self.objects.write().await.insert(key.to_string(), asset.clone());
        Ok(asset)
    }

    async fn resolve_url(&self, key: &str) -> Result<String> {
        self.objects
            .read()
            .await
            .get(key)
            .map(|asset| asset.url.clone())
            .ok_or_else(|| CrestmontError::not_found("stored_asset", key))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.objects
            .write()
            .await
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| CrestmontError::not_found("stored_asset", key))
    }
}

// ============================================================================
// Content repositories
// ============================================================================

/// In-memory [`NewsRepository`].
#[derive(Default)]
pub struct MemoryNewsRepository {
    posts: RwLock<HashMap<String, NewsPost>>,
}

impl MemoryNewsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NewsRepository for MemoryNewsRepository {
    async fn list_all(&self) -> Result<Vec<NewsPost>> {
        let mut posts: Vec<NewsPost> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<NewsPost>> {
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<NewsPost>> {
        Ok(self
            .posts
            .read()
            .await
            .values()
            .find(|post| post.slug == slug)
            .cloned())
    }

    async fn save(&self, post: &NewsPost) -> Result<()> {
        self.posts
            .write()
            .await
            .insert(post.id.clone(), post.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.posts
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CrestmontError::not_found("news_post", id))
    }
}

/// In-memory [`JobRepository`].
#[derive(Default)]
pub struct MemoryJobRepository {
    postings: RwLock<HashMap<String, JobPosting>>,
}

impl MemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for MemoryJobRepository {
    async fn list_all(&self) -> Result<Vec<JobPosting>> {
        let mut postings: Vec<JobPosting> = self.postings.read().await.values().cloned().collect();
        postings.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        Ok(postings)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<JobPosting>> {
        Ok(self.postings.read().await.get(id).cloned())
    }

    async fn save(&self, posting: &JobPosting) -> Result<()> {
        self.postings
            .write()
            .await
            .insert(posting.id.clone(), posting.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.postings
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CrestmontError::not_found("job_posting", id))
    }
}

/// In-memory [`ProgramRepository`].
#[derive(Default)]
pub struct MemoryProgramRepository {
    programs: RwLock<HashMap<String, AcademicProgram>>,
}

impl MemoryProgramRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgramRepository for MemoryProgramRepository {
    async fn list_all(&self) -> Result<Vec<AcademicProgram>> {
        let mut programs: Vec<AcademicProgram> =
            self.programs.read().await.values().cloned().collect();
        programs.sort_by(|a, b| {
            a.degree_level
                .cmp(&b.degree_level)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(programs)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<AcademicProgram>> {
        Ok(self.programs.read().await.get(id).cloned())
    }

    async fn save(&self, program: &AcademicProgram) -> Result<()> {
        self.programs
            .write()
            .await
            .insert(program.id.clone(), program.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.programs
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CrestmontError::not_found("academic_program", id))
    }
}

/// In-memory [`CampusRepository`].
#[derive(Default)]
pub struct MemoryCampusRepository {
    sections: RwLock<HashMap<String, CampusSection>>,
}

impl MemoryCampusRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CampusRepository for MemoryCampusRepository {
    async fn list_all(&self) -> Result<Vec<CampusSection>> {
        let mut sections: Vec<CampusSection> =
            self.sections.read().await.values().cloned().collect();
        sections.sort_by_key(|section| section.sort_order);
        Ok(sections)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CampusSection>> {
        Ok(self.sections.read().await.get(id).cloned())
    }

    async fn save(&self, section: &CampusSection) -> Result<()> {
        self.sections
            .write()
            .await
            .insert(section.id.clone(), section.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.sections
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CrestmontError::not_found("campus_section", id))
    }
}

/// In-memory [`GalleryRepository`].
#[derive(Default)]
pub struct MemoryGalleryRepository {
    images: RwLock<HashMap<String, GalleryImage>>,
}

impl MemoryGalleryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GalleryRepository for MemoryGalleryRepository {
    async fn list_all(&self) -> Result<Vec<GalleryImage>> {
        let mut images: Vec<GalleryImage> = self.images.read().await.values().cloned().collect();
        // Manually ordered images first, then newest uploads.
        images.sort_by(|a, b| match (a.sort_order, b.sort_order) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => b.uploaded_at.cmp(&a.uploaded_at),
        });
        Ok(images)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<GalleryImage>> {
        Ok(self.images.read().await.get(id).cloned())
    }

    async fn save(&self, image: &GalleryImage) -> Result<()> {
        self.images
            .write()
            .await
            .insert(image.id.clone(), image.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.images
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CrestmontError::not_found("gallery_image", id))
    }
}

/// In-memory [`ChannelRepository`].
#[derive(Default)]
pub struct MemoryChannelRepository {
    channel: RwLock<Option<HomepageChannel>>,
}

impl MemoryChannelRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChannelRepository for MemoryChannelRepository {
    async fn load(&self) -> Result<HomepageChannel> {
        Ok(self.channel.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, channel: &HomepageChannel) -> Result<()> {
        *self.channel.write().await = Some(channel.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_sign_in_rejects_bad_password() {
        let auth = MemoryAuthGateway::new().with_account("dean@crestmont.edu", "s3cret", "Dean");
        let err = auth.sign_in("dean@crestmont.edu", "wrong").await.unwrap_err();
        assert!(err.is_auth());
        assert!(auth.current_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let auth = MemoryAuthGateway::new().with_account("dean@crestmont.edu", "s3cret", "Dean");
        let session = auth.sign_in("dean@crestmont.edu", "s3cret").await.unwrap();
        assert_eq!(session.display_name, "Dean");
        assert!(auth.current_session().await.unwrap().is_some());

        auth.sign_out().await.unwrap();
        assert!(auth.current_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_object_store_roundtrip() {
        let store = MemoryObjectStore::new();
        let asset = store.upload("quad.png", vec![0u8; 128]).await.unwrap();
        assert_eq!(asset.mime_type, "image/png");
        assert_eq!(asset.size, 128);

        let url = store.resolve_url(&asset.key).await.unwrap();
        assert_eq!(url, asset.url);

        store.remove(&asset.key).await.unwrap();
        assert!(store.resolve_url(&asset.key).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_news_listing_is_newest_first() {
        let repo = MemoryNewsRepository::new();
        let now = Utc::now();
        let older = NewsPost::new("Older", "older", "...", now - Duration::days(1));
        let newer = NewsPost::new("Newer", "newer", "...", now);
        repo.save(&older).await.unwrap();
        repo.save(&newer).await.unwrap();

        let posts = repo.list_all().await.unwrap();
        assert_eq!(posts[0].slug, "newer");
        assert_eq!(posts[1].slug, "older");
    }

    #[tokio::test]
    async fn test_gallery_manual_order_precedes_uploads() {
        let repo = MemoryGalleryRepository::new();
        let now = Utc::now();
        let asset = StoredAsset {
            key: "k".to_string(),
            url: "memory://media/k".to_string(),
            mime_type: "image/jpeg".to_string(),
            size: 1,
        };

        let mut pinned = GalleryImage::from_asset("Pinned", &asset, now - Duration::days(2));
        pinned.sort_order = Some(1);
        let recent = GalleryImage::from_asset("Recent", &asset, now);
        repo.save(&pinned).await.unwrap();
        repo.save(&recent).await.unwrap();

        let images = repo.list_all().await.unwrap();
        assert_eq!(images[0].caption, "Pinned");
        assert_eq!(images[1].caption, "Recent");
    }

    #[tokio::test]
    async fn test_channel_defaults_until_saved() {
        let repo = MemoryChannelRepository::new();
        assert_eq!(repo.load().await.unwrap(), HomepageChannel::default());

        let channel = HomepageChannel {
            headline: "Welcome".to_string(),
            ..HomepageChannel::default()
        };
        repo.save(&channel).await.unwrap();
        assert_eq!(repo.load().await.unwrap().headline, "Welcome");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = MemoryJobRepository::new();
        assert!(repo.delete("missing").await.unwrap_err().is_not_found());
    }
}
