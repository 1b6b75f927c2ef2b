//! Homepage channel domain.

pub mod model;
pub mod repository;

pub use model::HomepageChannel;
pub use repository::ChannelRepository;
