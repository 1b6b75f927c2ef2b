//! Document DTOs and schema migrations.
//!
//! Documents stored in the hosted database carry a `schema_version` field so
//! the stored shape can evolve independently of the domain models. Decoding
//! picks the DTO for the stored major version and walks the conversion chain
//! up to the current shape; encoding always writes the current version.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crestmont_core::content::campus::CampusSection;
use crestmont_core::content::careers::JobPosting;
use crestmont_core::content::channel::HomepageChannel;
use crestmont_core::content::gallery::GalleryImage;
use crestmont_core::content::news::{NewsPost, PublishStatus};
use crestmont_core::content::programs::{AcademicProgram, DegreeLevel};
use crestmont_core::error::{CrestmontError, Result};

fn schema_version(value: &serde_json::Value) -> Result<semver::Version> {
    let raw = value
        .get("schema_version")
        .and_then(|v| v.as_str())
        .unwrap_or("1.0.0");
    semver::Version::parse(raw).map_err(|e| CrestmontError::Serialization {
        format: "JSON".to_string(),
        message: format!("invalid schema_version '{}': {}", raw, e),
    })
}

fn parse<D: DeserializeOwned>(value: serde_json::Value) -> Result<D> {
    Ok(serde_json::from_value(value)?)
}

fn unsupported(entity: &str, version: &semver::Version) -> CrestmontError {
    CrestmontError::Serialization {
        format: "JSON".to_string(),
        message: format!("unsupported {} schema version {}", entity, version),
    }
}

// ============================================================================
// News
// ============================================================================

pub const NEWS_POST_V1_VERSION: &str = "1.0.0";
pub const NEWS_POST_V2_VERSION: &str = "2.0.0";

/// News post document (V1.0.0). Initial shape without a cover image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsPostV1 {
    #[serde(default)]
    pub schema_version: String,
    pub id: String,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub status: PublishStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// News post document (V2.0.0). Added `cover_image_key` for the news grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsPostV2 {
    pub schema_version: String,
    pub id: String,
    pub slug: String,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_key: Option<String>,
    pub status: PublishStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// V1 posts predate cover images; the field migrates as None.
impl From<NewsPostV1> for NewsPostV2 {
    fn from(v1: NewsPostV1) -> Self {
        Self {
            schema_version: NEWS_POST_V2_VERSION.to_string(),
            id: v1.id,
            slug: v1.slug,
            title: v1.title,
            body: v1.body,
            cover_image_key: None,
            status: v1.status,
            published_at: v1.published_at,
            created_at: v1.created_at,
            updated_at: v1.updated_at,
        }
    }
}

impl From<NewsPostV2> for NewsPost {
    fn from(dto: NewsPostV2) -> Self {
        Self {
            id: dto.id,
            slug: dto.slug,
            title: dto.title,
            body: dto.body,
            cover_image_key: dto.cover_image_key,
            status: dto.status,
            published_at: dto.published_at,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

impl From<&NewsPost> for NewsPostV2 {
    fn from(post: &NewsPost) -> Self {
        Self {
            schema_version: NEWS_POST_V2_VERSION.to_string(),
            id: post.id.clone(),
            slug: post.slug.clone(),
            title: post.title.clone(),
            body: post.body.clone(),
            cover_image_key: post.cover_image_key.clone(),
            status: post.status,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

pub fn decode_news_post(value: serde_json::Value) -> Result<NewsPost> {
    let version = schema_version(&value)?;
    match version.major {
        1 => Ok(NewsPostV2::from(parse::<NewsPostV1>(value)?).into()),
        2 => Ok(parse::<NewsPostV2>(value)?.into()),
        _ => Err(unsupported("news_post", &version)),
    }
}

pub fn encode_news_post(post: &NewsPost) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(NewsPostV2::from(post))?)
}

// ============================================================================
// Careers
// ============================================================================

pub const JOB_POSTING_V1_VERSION: &str = "1.0.0";

/// Job posting document (V1.0.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPostingV1 {
    #[serde(default)]
    pub schema_version: String,
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
    pub posted_at: DateTime<Utc>,
    pub is_open: bool,
}

impl From<JobPostingV1> for JobPosting {
    fn from(dto: JobPostingV1) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            department: dto.department,
            location: dto.location,
            description: dto.description,
            apply_url: dto.apply_url,
            posted_at: dto.posted_at,
            is_open: dto.is_open,
        }
    }
}

impl From<&JobPosting> for JobPostingV1 {
    fn from(posting: &JobPosting) -> Self {
        Self {
            schema_version: JOB_POSTING_V1_VERSION.to_string(),
            id: posting.id.clone(),
            title: posting.title.clone(),
            department: posting.department.clone(),
            location: posting.location.clone(),
            description: posting.description.clone(),
            apply_url: posting.apply_url.clone(),
            posted_at: posting.posted_at,
            is_open: posting.is_open,
        }
    }
}

pub fn decode_job_posting(value: serde_json::Value) -> Result<JobPosting> {
    let version = schema_version(&value)?;
    match version.major {
        1 => Ok(parse::<JobPostingV1>(value)?.into()),
        _ => Err(unsupported("job_posting", &version)),
    }
}

pub fn encode_job_posting(posting: &JobPosting) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(JobPostingV1::from(posting))?)
}

// ============================================================================
// Programs
// ============================================================================

pub const ACADEMIC_PROGRAM_V1_VERSION: &str = "1.0.0";

/// Academic program document (V1.0.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicProgramV1 {
    #[serde(default)]
    pub schema_version: String,
    pub id: String,
    pub name: String,
    pub degree_level: DegreeLevel,
    pub department: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_key: Option<String>,
}

impl From<AcademicProgramV1> for AcademicProgram {
    fn from(dto: AcademicProgramV1) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            degree_level: dto.degree_level,
            department: dto.department,
            summary: dto.summary,
            image_key: dto.image_key,
        }
    }
}

impl From<&AcademicProgram> for AcademicProgramV1 {
    fn from(program: &AcademicProgram) -> Self {
        Self {
            schema_version: ACADEMIC_PROGRAM_V1_VERSION.to_string(),
            id: program.id.clone(),
            name: program.name.clone(),
            degree_level: program.degree_level,
            department: program.department.clone(),
            summary: program.summary.clone(),
            image_key: program.image_key.clone(),
        }
    }
}

pub fn decode_academic_program(value: serde_json::Value) -> Result<AcademicProgram> {
    let version = schema_version(&value)?;
    match version.major {
        1 => Ok(parse::<AcademicProgramV1>(value)?.into()),
        _ => Err(unsupported("academic_program", &version)),
    }
}

pub fn encode_academic_program(program: &AcademicProgram) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(AcademicProgramV1::from(program))?)
}

// ============================================================================
// Campus sections
// ============================================================================

pub const CAMPUS_SECTION_V1_VERSION: &str = "1.0.0";

/// Campus section document (V1.0.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusSectionV1 {
    #[serde(default)]
    pub schema_version: String,
    pub id: String,
    pub heading: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_key: Option<String>,
    pub sort_order: i32,
}

impl From<CampusSectionV1> for CampusSection {
    fn from(dto: CampusSectionV1) -> Self {
        Self {
            id: dto.id,
            heading: dto.heading,
            body: dto.body,
            image_key: dto.image_key,
            sort_order: dto.sort_order,
        }
    }
}

impl From<&CampusSection> for CampusSectionV1 {
    fn from(section: &CampusSection) -> Self {
        Self {
            schema_version: CAMPUS_SECTION_V1_VERSION.to_string(),
            id: section.id.clone(),
            heading: section.heading.clone(),
            body: section.body.clone(),
            image_key: section.image_key.clone(),
            sort_order: section.sort_order,
        }
    }
}

pub fn decode_campus_section(value: serde_json::Value) -> Result<CampusSection> {
    let version = schema_version(&value)?;
    match version.major {
        1 => Ok(parse::<CampusSectionV1>(value)?.into()),
        _ => Err(unsupported("campus_section", &version)),
    }
}

pub fn encode_campus_section(section: &CampusSection) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(CampusSectionV1::from(section))?)
}

// ============================================================================
// Gallery
// ============================================================================

pub const GALLERY_IMAGE_V1_VERSION: &str = "1.0.0";

/// Gallery image document (V1.0.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImageV1 {
    #[serde(default)]
    pub schema_version: String,
    pub id: String,
    pub caption: String,
    pub image_key: String,
    pub mime_type: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl From<GalleryImageV1> for GalleryImage {
    fn from(dto: GalleryImageV1) -> Self {
        Self {
            id: dto.id,
            caption: dto.caption,
            image_key: dto.image_key,
            mime_type: dto.mime_type,
            size: dto.size,
            uploaded_at: dto.uploaded_at,
            sort_order: dto.sort_order,
        }
    }
}

impl From<&GalleryImage> for GalleryImageV1 {
    fn from(image: &GalleryImage) -> Self {
        Self {
            schema_version: GALLERY_IMAGE_V1_VERSION.to_string(),
            id: image.id.clone(),
            caption: image.caption.clone(),
            image_key: image.image_key.clone(),
            mime_type: image.mime_type.clone(),
            size: image.size,
            uploaded_at: image.uploaded_at,
            sort_order: image.sort_order,
        }
    }
}

pub fn decode_gallery_image(value: serde_json::Value) -> Result<GalleryImage> {
    let version = schema_version(&value)?;
    match version.major {
        1 => Ok(parse::<GalleryImageV1>(value)?.into()),
        _ => Err(unsupported("gallery_image", &version)),
    }
}

pub fn encode_gallery_image(image: &GalleryImage) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(GalleryImageV1::from(image))?)
}

// ============================================================================
// Homepage channel
// ============================================================================

pub const HOMEPAGE_CHANNEL_V1_VERSION: &str = "1.0.0";

/// Homepage channel document (V1.0.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomepageChannelV1 {
    #[serde(default)]
    pub schema_version: String,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image_key: Option<String>,
    pub show_video: bool,
}

impl From<HomepageChannelV1> for HomepageChannel {
    fn from(dto: HomepageChannelV1) -> Self {
        Self {
            headline: dto.headline,
            video_url: dto.video_url,
            banner_image_key: dto.banner_image_key,
            show_video: dto.show_video,
        }
    }
}

impl From<&HomepageChannel> for HomepageChannelV1 {
    fn from(channel: &HomepageChannel) -> Self {
        Self {
            schema_version: HOMEPAGE_CHANNEL_V1_VERSION.to_string(),
            headline: channel.headline.clone(),
            video_url: channel.video_url.clone(),
            banner_image_key: channel.banner_image_key.clone(),
            show_video: channel.show_video,
        }
    }
}

pub fn decode_homepage_channel(value: serde_json::Value) -> Result<HomepageChannel> {
    let version = schema_version(&value)?;
    match version.major {
        1 => Ok(parse::<HomepageChannelV1>(value)?.into()),
        _ => Err(unsupported("homepage_channel", &version)),
    }
}

pub fn encode_homepage_channel(channel: &HomepageChannel) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(HomepageChannelV1::from(channel))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_v1_migrates_without_cover_image() {
        let v1 = serde_json::json!({
            "schema_version": "1.0.0",
            "id": "post-1",
            "slug": "welcome-week",
            "title": "Welcome Week",
            "body": "...",
            "status": "published",
            "published_at": "2025-09-01T12:00:00Z",
            "created_at": "2025-08-20T09:00:00Z",
            "updated_at": "2025-09-01T12:00:00Z"
        });

        let post = decode_news_post(v1).unwrap();
        assert_eq!(post.slug, "welcome-week");
        assert!(post.cover_image_key.is_none());
        assert!(post.is_published());
    }

    #[test]
    fn test_news_roundtrip_is_current_version() {
        let now = Utc::now();
        let mut post = NewsPost::new("Title", "title", "body", now);
        post.cover_image_key = Some("media/cover".to_string());

        let value = encode_news_post(&post).unwrap();
        assert_eq!(
            value.get("schema_version").and_then(|v| v.as_str()),
            Some(NEWS_POST_V2_VERSION)
        );

        let decoded = decode_news_post(value).unwrap();
        assert_eq!(decoded, post);
    }

    #[test]
    fn test_missing_schema_version_defaults_to_v1() {
        let value = serde_json::json!({
            "id": "post-2",
            "slug": "old-doc",
            "title": "Old",
            "body": "...",
            "status": "draft",
            "published_at": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        });
        let post = decode_news_post(value).unwrap();
        assert_eq!(post.slug, "old-doc");
    }

    #[test]
    fn test_future_major_version_is_rejected() {
        let value = serde_json::json!({
            "schema_version": "9.0.0",
            "id": "post-3"
        });
        let err = decode_news_post(value).unwrap_err();
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn test_channel_roundtrip() {
        let channel = HomepageChannel {
            headline: "Find your place at Crestmont".to_string(),
            video_url: Some("https://cdn.example.com/tour.mp4".to_string()),
            banner_image_key: Some("hero-banner".to_string()),
            show_video: true,
        };
        let decoded = decode_homepage_channel(encode_homepage_channel(&channel).unwrap()).unwrap();
        assert_eq!(decoded, channel);
    }
}
