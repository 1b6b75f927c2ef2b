//! Hosted document database client and the repository implementations
//! built on it.

use std::sync::Arc;

use async_trait::async_trait;

use crestmont_core::content::campus::{CampusRepository, CampusSection};
use crestmont_core::content::careers::{JobPosting, JobRepository};
use crestmont_core::content::channel::{ChannelRepository, HomepageChannel};
use crestmont_core::content::gallery::{GalleryImage, GalleryRepository};
use crestmont_core::content::news::{NewsPost, NewsRepository};
use crestmont_core::content::programs::{AcademicProgram, ProgramRepository};
use crestmont_core::error::{CrestmontError, Result};

use super::client::HostedClient;
use crate::dto;

/// Collection ids in the hosted database.
const COLLECTION_NEWS: &str = "news_posts";
const COLLECTION_JOBS: &str = "job_postings";
const COLLECTION_PROGRAMS: &str = "academic_programs";
const COLLECTION_CAMPUS: &str = "campus_sections";
const COLLECTION_GALLERY: &str = "gallery_images";
const COLLECTION_CHANNEL: &str = "homepage_channel";

/// Document id of the homepage channel singleton.
const CHANNEL_DOCUMENT_ID: &str = "main";

/// Generic client for one hosted database.
///
/// Repositories share a single instance and differ only in collection id and
/// codec, mirroring how the admin panel treats every collection as documents
/// plus a schema.
pub struct RemoteDocuments {
    client: Arc<HostedClient>,
    database_id: String,
}

impl RemoteDocuments {
    pub fn new(client: Arc<HostedClient>, database_id: impl Into<String>) -> Self {
        Self {
            client,
            database_id: database_id.into(),
        }
    }

    fn collection_path(&self, collection: &str) -> String {
        format!(
            "/v1/databases/{}/collections/{}/documents",
            self.database_id, collection
        )
    }

    fn document_path(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_path(collection), id)
    }

    async fn list(&self, collection: &str) -> Result<Vec<serde_json::Value>> {
        let value = self
            .client
            .get_json(&self.collection_path(collection))
            .await?
            .ok_or_else(|| {
                CrestmontError::backend(format!("collection '{}' does not exist", collection))
            })?;
        match value.get("documents") {
            Some(serde_json::Value::Array(documents)) => Ok(documents.clone()),
            _ => Err(CrestmontError::backend(format!(
                "collection '{}' listing carried no documents array",
                collection
            ))),
        }
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<serde_json::Value>> {
        self.client
            .get_json(&self.document_path(collection, id))
            .await
    }

    async fn upsert(&self, collection: &str, id: &str, document: &serde_json::Value) -> Result<()> {
        self.client
            .put_json(&self.document_path(collection, id), document)
            .await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool> {
        self.client.delete(&self.document_path(collection, id)).await
    }
}

// ============================================================================
// Repository implementations
// ============================================================================

pub struct RemoteNewsRepository {
    documents: Arc<RemoteDocuments>,
}

impl RemoteNewsRepository {
    pub fn new(documents: Arc<RemoteDocuments>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl NewsRepository for RemoteNewsRepository {
    async fn list_all(&self) -> Result<Vec<NewsPost>> {
        let mut posts = self
            .documents
            .list(COLLECTION_NEWS)
            .await?
            .into_iter()
            .map(dto::decode_news_post)
            .collect::<Result<Vec<_>>>()?;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<NewsPost>> {
        match self.documents.get(COLLECTION_NEWS, id).await? {
            Some(value) => Ok(Some(dto::decode_news_post(value)?)),
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<NewsPost>> {
        // The hosted API has no slug index; filter the listing client-side.
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .find(|post| post.slug == slug))
    }

    async fn save(&self, post: &NewsPost) -> Result<()> {
        let document = dto::encode_news_post(post)?;
        self.documents
            .upsert(COLLECTION_NEWS, &post.id, &document)
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        if !self.documents.delete(COLLECTION_NEWS, id).await? {
            return Err(CrestmontError::not_found("news_post", id));
        }
        Ok(())
    }
}

pub struct RemoteJobRepository {
    documents: Arc<RemoteDocuments>,
}

impl RemoteJobRepository {
    pub fn new(documents: Arc<RemoteDocuments>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl JobRepository for RemoteJobRepository {
    async fn list_all(&self) -> Result<Vec<JobPosting>> {
        let mut postings = self
            .documents
            .list(COLLECTION_JOBS)
            .await?
            .into_iter()
            .map(dto::decode_job_posting)
            .collect::<Result<Vec<_>>>()?;
        postings.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        Ok(postings)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<JobPosting>> {
        match self.documents.get(COLLECTION_JOBS, id).await? {
            Some(value) => Ok(Some(dto::decode_job_posting(value)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, posting: &JobPosting) -> Result<()> {
        let document = dto::encode_job_posting(posting)?;
        self.documents
            .upsert(COLLECTION_JOBS, &posting.id, &document)
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        if !self.documents.delete(COLLECTION_JOBS, id).await? {
            return Err(CrestmontError::not_found("job_posting", id));
        }
        Ok(())
    }
}

pub struct RemoteProgramRepository {
    documents: Arc<RemoteDocuments>,
}

impl RemoteProgramRepository {
    pub fn new(documents: Arc<RemoteDocuments>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl ProgramRepository for RemoteProgramRepository {
    async fn list_all(&self) -> Result<Vec<AcademicProgram>> {
        let mut programs = self
            .documents
            .list(COLLECTION_PROGRAMS)
            .await?
            .into_iter()
            .map(dto::decode_academic_program)
            .collect::<Result<Vec<_>>>()?;
        programs.sort_by(|a, b| {
            a.degree_level
                .cmp(&b.degree_level)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(programs)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<AcademicProgram>> {
        match self.documents.get(COLLECTION_PROGRAMS, id).await? {
            Some(value) => Ok(Some(dto::decode_academic_program(value)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, program: &AcademicProgram) -> Result<()> {
        let document = dto::encode_academic_program(program)?;
        self.documents
            .upsert(COLLECTION_PROGRAMS, &program.id, &document)
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        if !self.documents.delete(COLLECTION_PROGRAMS, id).await? {
            return Err(CrestmontError::not_found("academic_program", id));
        }
        Ok(())
    }
}

pub struct RemoteCampusRepository {
    documents: Arc<RemoteDocuments>,
}

impl RemoteCampusRepository {
    pub fn new(documents: Arc<RemoteDocuments>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl CampusRepository for RemoteCampusRepository {
    async fn list_all(&self) -> Result<Vec<CampusSection>> {
        let mut sections = self
            .documents
            .list(COLLECTION_CAMPUS)
            .await?
            .into_iter()
            .map(dto::decode_campus_section)
            .collect::<Result<Vec<_>>>()?;
        sections.sort_by_key(|section| section.sort_order);
        Ok(sections)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CampusSection>> {
        match self.documents.get(COLLECTION_CAMPUS, id).await? {
            Some(value) => Ok(Some(dto::decode_campus_section(value)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, section: &CampusSection) -> Result<()> {
        let document = dto::encode_campus_section(section)?;
        self.documents
            .upsert(COLLECTION_CAMPUS, &section.id, &document)
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        if !self.documents.delete(COLLECTION_CAMPUS, id).await? {
            return Err(CrestmontError::not_found("campus_section", id));
        }
        Ok(())
    }
}

pub struct RemoteGalleryRepository {
    documents: Arc<RemoteDocuments>,
}

impl RemoteGalleryRepository {
    pub fn new(documents: Arc<RemoteDocuments>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl GalleryRepository for RemoteGalleryRepository {
    async fn list_all(&self) -> Result<Vec<GalleryImage>> {
        let mut images = self
            .documents
            .list(COLLECTION_GALLERY)
            .await?
            .into_iter()
            .map(dto::decode_gallery_image)
            .collect::<Result<Vec<_>>>()?;
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
        match self.documents.get(COLLECTION_GALLERY, id).await? {
            Some(value) => Ok(Some(dto::decode_gallery_image(value)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, image: &GalleryImage) -> Result<()> {
        let document = dto::encode_gallery_image(image)?;
        self.documents
            .upsert(COLLECTION_GALLERY, &image.id, &document)
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        if !self.documents.delete(COLLECTION_GALLERY, id).await? {
            return Err(CrestmontError::not_found("gallery_image", id));
        }
        Ok(())
    }
}

pub struct RemoteChannelRepository {
    documents: Arc<RemoteDocuments>,
}

impl RemoteChannelRepository {
    pub fn new(documents: Arc<RemoteDocuments>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl ChannelRepository for RemoteChannelRepository {
    async fn load(&self) -> Result<HomepageChannel> {
        match self
            .documents
            .get(COLLECTION_CHANNEL, CHANNEL_DOCUMENT_ID)
            .await?
        {
            Some(value) => dto::decode_homepage_channel(value),
            None => Ok(HomepageChannel::default()),
        }
    }

    async fn save(&self, channel: &HomepageChannel) -> Result<()> {
        let document = dto::encode_homepage_channel(channel)?;
        self.documents
            .upsert(COLLECTION_CHANNEL, CHANNEL_DOCUMENT_ID, &document)
            .await
    }
}
