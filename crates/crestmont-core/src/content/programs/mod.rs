//! Academic program domain.

pub mod model;
pub mod repository;

pub use model::{AcademicProgram, DegreeLevel};
pub use repository::ProgramRepository;
