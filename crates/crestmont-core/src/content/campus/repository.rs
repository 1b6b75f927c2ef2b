//! Campus section repository trait.

use async_trait::async_trait;

use super::model::CampusSection;
use crate::error::Result;

/// Repository for student-life sections.
#[async_trait]
pub trait CampusRepository: Send + Sync {
    /// Lists all sections ordered by `sort_order`.
    async fn list_all(&self) -> Result<Vec<CampusSection>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<CampusSection>>;

    async fn save(&self, section: &CampusSection) -> Result<()>;

    async fn delete(&self, id: &str) -> Result<()>;
}
