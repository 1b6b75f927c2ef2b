//! Careers management use case.

use std::sync::Arc;

use chrono::Utc;

use crestmont_core::content::careers::{JobPosting, JobRepository};
use crestmont_core::error::{CrestmontError, Result};

use super::require_non_empty;

/// Editable fields of a job posting.
#[derive(Debug, Clone)]
pub struct JobDraft {
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    pub apply_url: Option<String>,
}

pub struct CareersUseCase {
    repository: Arc<dyn JobRepository>,
}

impl CareersUseCase {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    fn validate(draft: &JobDraft) -> Result<()> {
        require_non_empty(&draft.title, "title")?;
        require_non_empty(&draft.department, "department")?;
        require_non_empty(&draft.location, "location")
    }

    pub async fn create(&self, draft: JobDraft) -> Result<JobPosting> {
        Self::validate(&draft)?;
        let mut posting = JobPosting::new(
            draft.title,
            draft.department,
            draft.location,
            draft.description,
            Utc::now(),
        );
        posting.apply_url = draft.apply_url;
        self.repository.save(&posting).await?;
        tracing::info!(id = %posting.id, title = %posting.title, "Job posting created");
        Ok(posting)
    }

    pub async fn update(&self, id: &str, draft: JobDraft) -> Result<JobPosting> {
        Self::validate(&draft)?;
        let mut posting = self.get(id).await?;
        posting.title = draft.title;
        posting.department = draft.department;
        posting.location = draft.location;
        posting.description = draft.description;
        posting.apply_url = draft.apply_url;
        self.repository.save(&posting).await?;
        Ok(posting)
    }

    pub async fn close(&self, id: &str) -> Result<JobPosting> {
        let mut posting = self.get(id).await?;
        posting.close();
        self.repository.save(&posting).await?;
        tracing::info!(id = %posting.id, "Job posting closed");
        Ok(posting)
    }

    pub async fn reopen(&self, id: &str) -> Result<JobPosting> {
        let mut posting = self.get(id).await?;
        posting.reopen();
        self.repository.save(&posting).await?;
        Ok(posting)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repository.delete(id).await
    }

    pub async fn list_all(&self) -> Result<Vec<JobPosting>> {
        self.repository.list_all().await
    }

    /// Open postings for the public careers page.
    pub async fn list_open(&self) -> Result<Vec<JobPosting>> {
        Ok(self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(|posting| posting.is_open)
            .collect())
    }

    async fn get(&self, id: &str) -> Result<JobPosting> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CrestmontError::not_found("job_posting", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crestmont_infrastructure::memory::MemoryJobRepository;

    fn usecase() -> CareersUseCase {
        CareersUseCase::new(Arc::new(MemoryJobRepository::new()))
    }

    fn draft() -> JobDraft {
        JobDraft {
            title: "Registrar".to_string(),
            department: "Admissions".to_string(),
            location: "Crestmont Campus".to_string(),
            description: "...".to_string(),
            apply_url: None,
        }
    }

    #[tokio::test]
    async fn test_closed_postings_leave_the_public_list() {
        let careers = usecase();
        let posting = careers.create(draft()).await.unwrap();
        assert_eq!(careers.list_open().await.unwrap().len(), 1);

        careers.close(&posting.id).await.unwrap();
        assert!(careers.list_open().await.unwrap().is_empty());
        // Still visible to admins.
        assert_eq!(careers.list_all().await.unwrap().len(), 1);

        careers.reopen(&posting.id).await.unwrap();
        assert_eq!(careers.list_open().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_requires_title() {
        let careers = usecase();
        let mut bad = draft();
        bad.title = "  ".to_string();
        assert!(careers.create(bad).await.unwrap_err().is_validation());
    }
}
