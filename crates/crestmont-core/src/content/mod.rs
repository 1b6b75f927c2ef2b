//! Content domain managed from the admin panel.

pub mod campus;
pub mod careers;
pub mod channel;
pub mod gallery;
pub mod news;
pub mod programs;
