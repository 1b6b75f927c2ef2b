//! Academic program domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Degree level a program awards. Ordering drives the grouping on the
/// academics page (undergraduate first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    Undergraduate,
    Graduate,
    Certificate,
}

impl DegreeLevel {
    pub fn label(&self) -> &'static str {
        match self {
            DegreeLevel::Undergraduate => "Undergraduate",
            DegreeLevel::Graduate => "Graduate",
            DegreeLevel::Certificate => "Certificate",
        }
    }
}

/// A degree or certificate program listed on the academics page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AcademicProgram {
    /// Unique identifier (UUID).
    pub id: String,
    pub name: String,
    pub degree_level: DegreeLevel,
    pub department: String,
    /// Short blurb shown on the program card.
    pub summary: String,
    /// Logical image key for the program card image.
    pub image_key: Option<String>,
}

impl AcademicProgram {
    pub fn new(
        name: impl Into<String>,
        degree_level: DegreeLevel,
        department: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            degree_level,
            department: department.into(),
            summary: summary.into(),
            image_key: None,
        }
    }
}
