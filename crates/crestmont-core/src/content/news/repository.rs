//! News repository trait.

use async_trait::async_trait;

use super::model::NewsPost;
use crate::error::Result;

/// Repository for news posts.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Lists all posts, newest first by creation time.
    async fn list_all(&self) -> Result<Vec<NewsPost>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<NewsPost>>;

    /// Slug lookup used by the public article route.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<NewsPost>>;

    /// Inserts or replaces the post with the same id.
    async fn save(&self, post: &NewsPost) -> Result<()>;

    async fn delete(&self, id: &str) -> Result<()>;
}
