//! Job posting domain.

pub mod model;
pub mod repository;

pub use model::JobPosting;
pub use repository::JobRepository;
