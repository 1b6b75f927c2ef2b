pub mod admin_usecase;
pub mod chat;
pub mod content;
pub mod gallery;
pub mod services;
pub mod site_assets;
pub mod telemetry;

pub use admin_usecase::AdminUseCase;
pub use chat::ChatUseCase;
pub use content::campus::CampusUseCase;
pub use content::careers::CareersUseCase;
pub use content::channel::ChannelUseCase;
pub use content::news::NewsUseCase;
pub use content::programs::ProgramsUseCase;
pub use gallery::GalleryUseCase;
pub use services::{AppServices, Backends};
pub use site_assets::SiteAssetsUseCase;
