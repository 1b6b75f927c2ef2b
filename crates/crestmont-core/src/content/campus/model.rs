//! Campus life domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered section on the student-life page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CampusSection {
    /// Unique identifier (UUID).
    pub id: String,
    pub heading: String,
    pub body: String,
    /// Logical image key for the section illustration.
    pub image_key: Option<String>,
    /// Display order (lower numbers appear first).
    pub sort_order: i32,
}

impl CampusSection {
    pub fn new(heading: impl Into<String>, body: impl Into<String>, sort_order: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            heading: heading.into(),
            body: body.into(),
            image_key: None,
            sort_order,
        }
    }
}
