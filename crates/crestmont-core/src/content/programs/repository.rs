//! Academic program repository trait.

use async_trait::async_trait;

use super::model::AcademicProgram;
use crate::error::Result;

/// Repository for academic programs.
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// Lists all programs grouped by degree level, then name.
    async fn list_all(&self) -> Result<Vec<AcademicProgram>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<AcademicProgram>>;

    async fn save(&self, program: &AcademicProgram) -> Result<()>;

    async fn delete(&self, id: &str) -> Result<()>;
}
