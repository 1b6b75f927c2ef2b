//! Content-management use cases backing the admin panel.

pub mod campus;
pub mod careers;
pub mod channel;
pub mod news;
pub mod programs;

use once_cell::sync::Lazy;
use regex::Regex;

use crestmont_core::error::{CrestmontError, Result};

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex must compile"));

/// Validates a URL-safe slug: lowercase alphanumerics separated by single
/// hyphens.
pub(crate) fn validate_slug(slug: &str) -> Result<()> {
    if SLUG_RE.is_match(slug) {
        Ok(())
    } else {
        Err(CrestmontError::validation(format!(
            "invalid slug '{}': use lowercase letters, digits and hyphens",
            slug
        )))
    }
}

pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(CrestmontError::validation(format!(
            "{} must not be empty",
            field
        )))
    } else {
        Ok(())
    }
}
