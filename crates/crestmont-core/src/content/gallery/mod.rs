//! Image gallery domain.

pub mod model;
pub mod repository;

pub use model::GalleryImage;
pub use repository::GalleryRepository;
