pub mod config_service;
pub mod dto;
pub mod memory;
pub mod paths;
pub mod remote;

pub use crate::config_service::ConfigService;
pub use crate::memory::{
    MemoryAuthGateway, MemoryCampusRepository, MemoryChannelRepository, MemoryGalleryRepository,
    MemoryJobRepository, MemoryNewsRepository, MemoryObjectStore, MemoryProgramRepository,
};
pub use crate::remote::auth::RemoteAuthGateway;
pub use crate::remote::client::HostedClient;
pub use crate::remote::documents::{
    RemoteCampusRepository, RemoteChannelRepository, RemoteDocuments, RemoteGalleryRepository,
    RemoteJobRepository, RemoteNewsRepository, RemoteProgramRepository,
};
pub use crate::remote::storage::RemoteObjectStore;
