//! End-to-end flows over in-memory backends: admin guard, content
//! lifecycle, gallery uploads feeding the image cache, and the chat widget.

use std::sync::Arc;

use crestmont_application::content::careers::JobDraft;
use crestmont_application::content::news::NewsDraft;
use crestmont_application::{AppServices, Backends};
use crestmont_core::auth::GateOutcome;
use crestmont_core::config::SiteConfig;
use crestmont_core::content::channel::HomepageChannel;
use crestmont_infrastructure::memory::{
    MemoryAuthGateway, MemoryCampusRepository, MemoryChannelRepository, MemoryGalleryRepository,
    MemoryJobRepository, MemoryNewsRepository, MemoryObjectStore, MemoryProgramRepository,
};

fn services() -> AppServices {
    let backends = Backends {
        auth: Arc::new(
            MemoryAuthGateway::new().with_account("dean@crestmont.edu", "s3cret", "Dean"),
        ),
        objects: Arc::new(MemoryObjectStore::new()),
        news: Arc::new(MemoryNewsRepository::new()),
        jobs: Arc::new(MemoryJobRepository::new()),
        programs: Arc::new(MemoryProgramRepository::new()),
        campus: Arc::new(MemoryCampusRepository::new()),
        gallery: Arc::new(MemoryGalleryRepository::new()),
        channel: Arc::new(MemoryChannelRepository::new()),
    };
    AppServices::new(backends, &SiteConfig::default())
}

#[tokio::test]
async fn admin_guard_tracks_the_session() {
    let app = services();

    assert_eq!(
        app.admin.require_admin().await.unwrap(),
        GateOutcome::Redirect("/admin/login".to_string())
    );

    app.admin
        .sign_in("dean@crestmont.edu", "s3cret")
        .await
        .unwrap();
    assert_eq!(
        app.admin.require_admin().await.unwrap(),
        GateOutcome::Admitted
    );

    app.admin.sign_out().await.unwrap();
    assert!(matches!(
        app.admin.require_admin().await.unwrap(),
        GateOutcome::Redirect(_)
    ));
}

#[tokio::test]
async fn news_lifecycle_controls_public_visibility() {
    let app = services();

    let post = app
        .news
        .create(NewsDraft {
            title: "Commencement 2026".to_string(),
            slug: "commencement-2026".to_string(),
            body: "...".to_string(),
            cover_image_key: None,
        })
        .await
        .unwrap();

    assert!(app.news.list_published().await.unwrap().is_empty());
    app.news.publish(&post.id).await.unwrap();

    let public = app.news.list_published().await.unwrap();
    assert_eq!(public.len(), 1);
    assert!(
        app.news
            .published_by_slug("commencement-2026")
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn gallery_upload_feeds_the_image_cache() {
    let app = services();

    let image = app
        .gallery
        .upload("Quad in autumn", "quad.jpg", vec![1, 2, 3])
        .await
        .unwrap();

    // The component rendering the gallery reads the cache, not storage.
    let url = app.image_cache.get(&image.image_key).expect("cached URL");
    assert!(url.starts_with("memory://media/"));

    // Unknown keys stay unresolved and render as placeholders.
    assert!(app.image_cache.get("hero-banner").is_none());
}

#[tokio::test]
async fn site_asset_replacement_rotates_the_cached_url() {
    let app = services();

    app.site_assets
        .set_asset("hero-banner", "banner-v1.jpg", vec![1])
        .await
        .unwrap();
    let first = app.image_cache.get("hero-banner").unwrap();

    app.site_assets
        .set_asset("hero-banner", "banner-v2.jpg", vec![2])
        .await
        .unwrap();
    let second = app.image_cache.get("hero-banner").unwrap();

    // Same logical key; the cache always serves the latest resolution.
    assert_eq!(first, second);
    app.site_assets.hydrate().await.unwrap();
    assert!(app.image_cache.get("hero-banner").is_some());
}

#[tokio::test]
async fn careers_and_channel_round_trip() {
    let app = services();

    let posting = app
        .careers
        .create(JobDraft {
            title: "Registrar".to_string(),
            department: "Admissions".to_string(),
            location: "Crestmont Campus".to_string(),
            description: "...".to_string(),
            apply_url: None,
        })
        .await
        .unwrap();
    app.careers.close(&posting.id).await.unwrap();
    assert!(app.careers.list_open().await.unwrap().is_empty());

    app.channel
        .update(HomepageChannel {
            headline: "Find your place at Crestmont".to_string(),
            video_url: Some("https://cdn.example.com/tour.mp4".to_string()),
            banner_image_key: Some("hero-banner".to_string()),
            show_video: true,
        })
        .await
        .unwrap();
    assert!(app.channel.get().await.unwrap().wants_video());
}

#[tokio::test]
async fn ask_ai_prefills_and_opens_the_widget() {
    let app = services();

    app.chat.ask("application deadlines");
    let state = app.chat_store.state();
    assert!(state.is_open);
    assert_eq!(state.prefilled_query, "application deadlines");

    // The widget consumes the query once; dismissing keeps it consumed.
    assert_eq!(app.chat.take_prefilled_query(), "application deadlines");
    app.chat.dismiss();
    assert_eq!(app.chat.take_prefilled_query(), "");
}
