//! Academics management use case.

use std::sync::Arc;

use crestmont_core::content::programs::{AcademicProgram, DegreeLevel, ProgramRepository};
use crestmont_core::error::{CrestmontError, Result};

use super::require_non_empty;

/// Editable fields of an academic program.
#[derive(Debug, Clone)]
pub struct ProgramDraft {
    pub name: String,
    pub degree_level: DegreeLevel,
    pub department: String,
    pub summary: String,
    pub image_key: Option<String>,
}

pub struct ProgramsUseCase {
    repository: Arc<dyn ProgramRepository>,
}

impl ProgramsUseCase {
    pub fn new(repository: Arc<dyn ProgramRepository>) -> Self {
        Self { repository }
    }

    fn validate(draft: &ProgramDraft) -> Result<()> {
        require_non_empty(&draft.name, "name")?;
        require_non_empty(&draft.department, "department")
    }

    pub async fn create(&self, draft: ProgramDraft) -> Result<AcademicProgram> {
        Self::validate(&draft)?;
        let mut program = AcademicProgram::new(
            draft.name,
            draft.degree_level,
            draft.department,
            draft.summary,
        );
        program.image_key = draft.image_key;
        self.repository.save(&program).await?;
        tracing::info!(id = %program.id, name = %program.name, "Academic program created");
        Ok(program)
    }

    pub async fn update(&self, id: &str, draft: ProgramDraft) -> Result<AcademicProgram> {
        Self::validate(&draft)?;
        let mut program = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CrestmontError::not_found("academic_program", id))?;
        program.name = draft.name;
        program.degree_level = draft.degree_level;
        program.department = draft.department;
        program.summary = draft.summary;
        program.image_key = draft.image_key;
        self.repository.save(&program).await?;
        Ok(program)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repository.delete(id).await
    }

    pub async fn list_all(&self) -> Result<Vec<AcademicProgram>> {
        self.repository.list_all().await
    }

    /// Programs grouped by degree level for the academics page, in level
    /// order (undergraduate first).
    pub async fn grouped_by_level(&self) -> Result<Vec<(DegreeLevel, Vec<AcademicProgram>)>> {
        let programs = self.repository.list_all().await?;
        let mut groups: Vec<(DegreeLevel, Vec<AcademicProgram>)> = Vec::new();
        for program in programs {
            match groups.last_mut() {
                Some((level, group)) if *level == program.degree_level => group.push(program),
                _ => groups.push((program.degree_level, vec![program])),
            }
        }
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crestmont_infrastructure::memory::MemoryProgramRepository;

    fn usecase() -> ProgramsUseCase {
        ProgramsUseCase::new(Arc::new(MemoryProgramRepository::new()))
    }

    fn draft(name: &str, level: DegreeLevel) -> ProgramDraft {
        ProgramDraft {
            name: name.to_string(),
            degree_level: level,
            department: "Sciences".to_string(),
            summary: "...".to_string(),
            image_key: None,
        }
    }

    #[tokio::test]
    async fn test_grouped_by_level_orders_undergraduate_first() {
        let programs = usecase();
        programs
            .create(draft("MS Data Science", DegreeLevel::Graduate))
            .await
            .unwrap();
        programs
            .create(draft("BS Biology", DegreeLevel::Undergraduate))
            .await
            .unwrap();
        programs
            .create(draft("BA History", DegreeLevel::Undergraduate))
            .await
            .unwrap();

        let groups = programs.grouped_by_level().await.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, DegreeLevel::Undergraduate);
        assert_eq!(groups[0].1.len(), 2);
        // Alphabetical within a level.
        assert_eq!(groups[0].1[0].name, "BA History");
        assert_eq!(groups[1].0, DegreeLevel::Graduate);
    }
}
