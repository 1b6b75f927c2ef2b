//! Campus life section domain.

pub mod model;
pub mod repository;

pub use model::CampusSection;
pub use repository::CampusRepository;
