//! News domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication state of a news post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    #[default]
    Draft,
    Published,
}

/// A news article shown on the public news page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsPost {
    /// Unique identifier (UUID).
    pub id: String,
    /// URL-safe slug, unique across posts.
    pub slug: String,
    pub title: String,
    /// Article body (markdown).
    pub body: String,
    /// Logical image key of the cover image, if one was uploaded.
    pub cover_image_key: Option<String>,
    pub status: PublishStatus,
    /// Set on first publish; cleared when the post returns to draft.
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsPost {
    /// Creates a new draft post.
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            slug: slug.into(),
            title: title.into(),
            body: body.into(),
            cover_image_key: None,
            status: PublishStatus::Draft,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == PublishStatus::Published
    }

    /// Publishes the post. Re-publishing keeps the original publish time.
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = PublishStatus::Published;
        if self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.updated_at = now;
    }

    /// Returns the post to draft and clears the publish time.
    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.status = PublishStatus::Draft;
        self.published_at = None;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_post_is_draft() {
        let now = Utc::now();
        let post = NewsPost::new("Commencement 2026", "commencement-2026", "...", now);
        assert_eq!(post.status, PublishStatus::Draft);
        assert!(post.published_at.is_none());
        assert!(!post.id.is_empty());
    }

    #[test]
    fn test_publish_sets_timestamp_once() {
        let now = Utc::now();
        let later = now + Duration::hours(1);
        let mut post = NewsPost::new("Title", "title", "...", now);

        post.publish(now);
        assert!(post.is_published());
        assert_eq!(post.published_at, Some(now));

        // Re-publishing must not move the original publish time.
        post.publish(later);
        assert_eq!(post.published_at, Some(now));
        assert_eq!(post.updated_at, later);
    }

    #[test]
    fn test_unpublish_clears_timestamp() {
        let now = Utc::now();
        let mut post = NewsPost::new("Title", "title", "...", now);
        post.publish(now);
        post.unpublish(now);
        assert!(!post.is_published());
        assert!(post.published_at.is_none());
    }
}
