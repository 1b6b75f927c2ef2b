//! Job posting repository trait.

use async_trait::async_trait;

use super::model::JobPosting;
use crate::error::Result;

/// Repository for job postings.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Lists all postings, newest first by posting time.
    async fn list_all(&self) -> Result<Vec<JobPosting>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<JobPosting>>;

    async fn save(&self, posting: &JobPosting) -> Result<()>;

    async fn delete(&self, id: &str) -> Result<()>;
}
