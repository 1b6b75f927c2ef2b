//! News management use case.

use std::sync::Arc;

use chrono::Utc;

use crestmont_core::content::news::{NewsPost, NewsRepository};
use crestmont_core::error::{CrestmontError, Result};

use super::{require_non_empty, validate_slug};

/// Editable fields of a news post.
#[derive(Debug, Clone)]
pub struct NewsDraft {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub cover_image_key: Option<String>,
}

pub struct NewsUseCase {
    repository: Arc<dyn NewsRepository>,
}

impl NewsUseCase {
    pub fn new(repository: Arc<dyn NewsRepository>) -> Self {
        Self { repository }
    }

    fn validate(draft: &NewsDraft) -> Result<()> {
        require_non_empty(&draft.title, "title")?;
        require_non_empty(&draft.body, "body")?;
        validate_slug(&draft.slug)
    }

    /// Slug uniqueness check, optionally ignoring the post being edited.
    async fn ensure_slug_free(&self, slug: &str, ignore_id: Option<&str>) -> Result<()> {
        if let Some(existing) = self.repository.find_by_slug(slug).await?
            && ignore_id != Some(existing.id.as_str())
        {
            return Err(CrestmontError::validation(format!(
                "slug '{}' is already in use",
                slug
            )));
        }
        Ok(())
    }

    /// Creates a new draft post.
    pub async fn create(&self, draft: NewsDraft) -> Result<NewsPost> {
        Self::validate(&draft)?;
        self.ensure_slug_free(&draft.slug, None).await?;

        let mut post = NewsPost::new(draft.title, draft.slug, draft.body, Utc::now());
        post.cover_image_key = draft.cover_image_key;
        self.repository.save(&post).await?;
        tracing::info!(id = %post.id, slug = %post.slug, "News post created");
        Ok(post)
    }

    /// Applies edits to an existing post without changing its publish state.
    pub async fn update(&self, id: &str, draft: NewsDraft) -> Result<NewsPost> {
        Self::validate(&draft)?;
        let mut post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CrestmontError::not_found("news_post", id))?;
        self.ensure_slug_free(&draft.slug, Some(id)).await?;

        post.title = draft.title;
        post.slug = draft.slug;
        post.body = draft.body;
        post.cover_image_key = draft.cover_image_key;
        post.updated_at = Utc::now();
        self.repository.save(&post).await?;
        Ok(post)
    }

    pub async fn publish(&self, id: &str) -> Result<NewsPost> {
        let mut post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CrestmontError::not_found("news_post", id))?;
        post.publish(Utc::now());
        self.repository.save(&post).await?;
        tracing::info!(id = %post.id, slug = %post.slug, "News post published");
        Ok(post)
    }

    pub async fn unpublish(&self, id: &str) -> Result<NewsPost> {
        let mut post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CrestmontError::not_found("news_post", id))?;
        post.unpublish(Utc::now());
        self.repository.save(&post).await?;
        tracing::info!(id = %post.id, slug = %post.slug, "News post unpublished");
        Ok(post)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repository.delete(id).await?;
        tracing::info!(id = %id, "News post deleted");
        Ok(())
    }

    /// Full listing for the admin table, drafts included.
    pub async fn list_all(&self) -> Result<Vec<NewsPost>> {
        self.repository.list_all().await
    }

    /// Published posts for the public news page, newest publish first.
    pub async fn list_published(&self) -> Result<Vec<NewsPost>> {
        let mut posts: Vec<NewsPost> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(NewsPost::is_published)
            .collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts)
    }

    /// Public article lookup; drafts read as missing.
    pub async fn published_by_slug(&self, slug: &str) -> Result<Option<NewsPost>> {
        Ok(self
            .repository
            .find_by_slug(slug)
            .await?
            .filter(NewsPost::is_published))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crestmont_infrastructure::memory::MemoryNewsRepository;

    fn usecase() -> NewsUseCase {
        NewsUseCase::new(Arc::new(MemoryNewsRepository::new()))
    }

    fn draft(title: &str, slug: &str) -> NewsDraft {
        NewsDraft {
            title: title.to_string(),
            slug: slug.to_string(),
            body: "body".to_string(),
            cover_image_key: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_bad_slug() {
        let news = usecase();
        let err = news.create(draft("Title", "Bad Slug")).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_slug() {
        let news = usecase();
        news.create(draft("First", "welcome-week")).await.unwrap();
        let err = news
            .create(draft("Second", "welcome-week"))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_update_keeps_own_slug() {
        let news = usecase();
        let post = news.create(draft("First", "welcome-week")).await.unwrap();
        // Re-saving with the same slug must not trip the uniqueness check.
        let updated = news
            .update(&post.id, draft("First, revised", "welcome-week"))
            .await
            .unwrap();
        assert_eq!(updated.title, "First, revised");
    }

    #[tokio::test]
    async fn test_drafts_are_invisible_to_the_public() {
        let news = usecase();
        let post = news.create(draft("Hidden", "hidden")).await.unwrap();

        assert!(news.list_published().await.unwrap().is_empty());
        assert!(news.published_by_slug("hidden").await.unwrap().is_none());

        news.publish(&post.id).await.unwrap();
        assert_eq!(news.list_published().await.unwrap().len(), 1);
        assert!(news.published_by_slug("hidden").await.unwrap().is_some());

        news.unpublish(&post.id).await.unwrap();
        assert!(news.published_by_slug("hidden").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let news = usecase();
        let err = news
            .update("missing", draft("Title", "slug"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
