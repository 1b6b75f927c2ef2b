//! Composition root.
//!
//! Builds the use-case services from explicitly injected backends. Stores
//! are plain values owned here and handed to whoever needs them; nothing in
//! the system reaches for a process-global.

use std::sync::Arc;

use crestmont_core::auth::{AdminGate, AuthGateway};
use crestmont_core::config::SiteConfig;
use crestmont_core::content::campus::CampusRepository;
use crestmont_core::content::careers::JobRepository;
use crestmont_core::content::channel::ChannelRepository;
use crestmont_core::content::gallery::GalleryRepository;
use crestmont_core::content::news::NewsRepository;
use crestmont_core::content::programs::ProgramRepository;
use crestmont_core::error::Result;
use crestmont_core::storage::ObjectStore;
use crestmont_core::store::{ChatStore, ImageCache};
use crestmont_infrastructure::{
    ConfigService, HostedClient, RemoteAuthGateway, RemoteCampusRepository,
    RemoteChannelRepository, RemoteDocuments, RemoteGalleryRepository, RemoteJobRepository,
    RemoteNewsRepository, RemoteObjectStore, RemoteProgramRepository,
};

use crate::admin_usecase::AdminUseCase;
use crate::chat::ChatUseCase;
use crate::content::campus::CampusUseCase;
use crate::content::careers::CareersUseCase;
use crate::content::channel::ChannelUseCase;
use crate::content::news::NewsUseCase;
use crate::content::programs::ProgramsUseCase;
use crate::gallery::GalleryUseCase;
use crate::site_assets::SiteAssetsUseCase;

/// The capability implementations the services run on.
pub struct Backends {
    pub auth: Arc<dyn AuthGateway>,
    pub objects: Arc<dyn ObjectStore>,
    pub news: Arc<dyn NewsRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub programs: Arc<dyn ProgramRepository>,
    pub campus: Arc<dyn CampusRepository>,
    pub gallery: Arc<dyn GalleryRepository>,
    pub channel: Arc<dyn ChannelRepository>,
}

/// Use-case services shared across the page and admin layers.
pub struct AppServices {
    pub admin: Arc<AdminUseCase>,
    pub news: Arc<NewsUseCase>,
    pub careers: Arc<CareersUseCase>,
    pub programs: Arc<ProgramsUseCase>,
    pub campus: Arc<CampusUseCase>,
    pub channel: Arc<ChannelUseCase>,
    pub gallery: Arc<GalleryUseCase>,
    pub site_assets: Arc<SiteAssetsUseCase>,
    pub chat: ChatUseCase,
    /// Store consumed by the chat widget.
    pub chat_store: ChatStore,
    /// Store consumed by image-bearing components.
    pub image_cache: ImageCache,
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}

impl AppServices {
    /// Wires the services from injected backends.
    pub fn new(backends: Backends, site: &SiteConfig) -> Self {
        let chat_store = ChatStore::new();
        let image_cache = ImageCache::new();
        let gate = AdminGate::new(site.admin_login_path.clone());

        Self {
            admin: Arc::new(AdminUseCase::new(backends.auth, gate)),
            news: Arc::new(NewsUseCase::new(backends.news)),
            careers: Arc::new(CareersUseCase::new(backends.jobs)),
            programs: Arc::new(ProgramsUseCase::new(backends.programs)),
            campus: Arc::new(CampusUseCase::new(backends.campus)),
            channel: Arc::new(ChannelUseCase::new(backends.channel)),
            gallery: Arc::new(GalleryUseCase::new(
                backends.gallery,
                backends.objects.clone(),
                image_cache.clone(),
            )),
            site_assets: Arc::new(SiteAssetsUseCase::new(
                backends.objects,
                image_cache.clone(),
            )),
            chat: ChatUseCase::new(chat_store.clone()),
            chat_store,
            image_cache,
        }
    }

    /// Connects to the hosted backend described by the configuration.
    ///
    /// Fails fast when the backend endpoint or API key is missing; there is
    /// no degraded half-connected mode.
    pub fn connect(config_service: &ConfigService) -> Result<Self> {
        let config = config_service.get_config();
        let backend = config_service.backend_config();
        let credentials = config_service.load_credentials()?;

        let client = Arc::new(HostedClient::new(&backend, &credentials)?);
        let documents = Arc::new(RemoteDocuments::new(
            client.clone(),
            backend.database_id.clone(),
        ));
        tracing::info!(endpoint = %client.endpoint(), "Connected to hosted backend");

        let backends = Backends {
            auth: Arc::new(RemoteAuthGateway::new(client.clone())),
            objects: Arc::new(RemoteObjectStore::new(client, backend.bucket_id.clone())),
            news: Arc::new(RemoteNewsRepository::new(documents.clone())),
            jobs: Arc::new(RemoteJobRepository::new(documents.clone())),
            programs: Arc::new(RemoteProgramRepository::new(documents.clone())),
            campus: Arc::new(RemoteCampusRepository::new(documents.clone())),
            gallery: Arc::new(RemoteGalleryRepository::new(documents.clone())),
            channel: Arc::new(RemoteChannelRepository::new(documents)),
        };

        Ok(Self::new(backends, &config.site))
    }
}
