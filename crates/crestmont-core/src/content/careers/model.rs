//! Job posting domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An open position listed on the careers page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobPosting {
    /// Unique identifier (UUID).
    pub id: String,
    pub title: String,
    pub department: String,
    /// Campus or "Remote".
    pub location: String,
    pub description: String,
    /// External application link, if applications are handled off-site.
    pub apply_url: Option<String>,
    pub posted_at: DateTime<Utc>,
    /// Closed postings stay in the admin list but leave the public page.
    pub is_open: bool,
}

impl JobPosting {
    pub fn new(
        title: impl Into<String>,
        department: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            department: department.into(),
            location: location.into(),
            description: description.into(),
            apply_url: None,
            posted_at: now,
            is_open: true,
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn reopen(&mut self) {
        self.is_open = true;
    }
}
