//! Campus life management use case.

use std::sync::Arc;

use crestmont_core::content::campus::{CampusRepository, CampusSection};
use crestmont_core::error::{CrestmontError, Result};

use super::require_non_empty;

/// Editable fields of a student-life section.
#[derive(Debug, Clone)]
pub struct SectionDraft {
    pub heading: String,
    pub body: String,
    pub image_key: Option<String>,
    pub sort_order: i32,
}

pub struct CampusUseCase {
    repository: Arc<dyn CampusRepository>,
}

impl CampusUseCase {
    pub fn new(repository: Arc<dyn CampusRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, draft: SectionDraft) -> Result<CampusSection> {
        require_non_empty(&draft.heading, "heading")?;
        let mut section = CampusSection::new(draft.heading, draft.body, draft.sort_order);
        section.image_key = draft.image_key;
        self.repository.save(&section).await?;
        tracing::info!(id = %section.id, heading = %section.heading, "Campus section created");
        Ok(section)
    }

    pub async fn update(&self, id: &str, draft: SectionDraft) -> Result<CampusSection> {
        require_non_empty(&draft.heading, "heading")?;
        let mut section = self.get(id).await?;
        section.heading = draft.heading;
        section.body = draft.body;
        section.image_key = draft.image_key;
        section.sort_order = draft.sort_order;
        self.repository.save(&section).await?;
        Ok(section)
    }

    /// Moves a section within the page without touching its content.
    pub async fn reorder(&self, id: &str, sort_order: i32) -> Result<CampusSection> {
        let mut section = self.get(id).await?;
        section.sort_order = sort_order;
        self.repository.save(&section).await?;
        Ok(section)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repository.delete(id).await
    }

    /// Sections in display order for the student-life page.
    pub async fn list(&self) -> Result<Vec<CampusSection>> {
        self.repository.list_all().await
    }

    async fn get(&self, id: &str) -> Result<CampusSection> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CrestmontError::not_found("campus_section", id))
    }
}
