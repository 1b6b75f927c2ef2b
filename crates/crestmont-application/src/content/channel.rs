//! Homepage channel use case.

use std::sync::Arc;

use crestmont_core::content::channel::{ChannelRepository, HomepageChannel};
use crestmont_core::error::Result;

pub struct ChannelUseCase {
    repository: Arc<dyn ChannelRepository>,
}

impl ChannelUseCase {
    pub fn new(repository: Arc<dyn ChannelRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self) -> Result<HomepageChannel> {
        self.repository.load().await
    }

    /// Replaces the channel document wholesale.
    pub async fn update(&self, channel: HomepageChannel) -> Result<HomepageChannel> {
        self.repository.save(&channel).await?;
        tracing::info!(
            show_video = channel.show_video,
            "Homepage channel updated"
        );
        Ok(channel)
    }

    /// Toggles video playback without editing the rest of the document.
    pub async fn set_show_video(&self, show_video: bool) -> Result<HomepageChannel> {
        let mut channel = self.repository.load().await?;
        channel.show_video = show_video;
        self.repository.save(&channel).await?;
        Ok(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crestmont_infrastructure::memory::MemoryChannelRepository;

    #[tokio::test]
    async fn test_toggle_preserves_other_fields() {
        let channel_usecase = ChannelUseCase::new(Arc::new(MemoryChannelRepository::new()));
        channel_usecase
            .update(HomepageChannel {
                headline: "Find your place at Crestmont".to_string(),
                video_url: Some("https://cdn.example.com/tour.mp4".to_string()),
                banner_image_key: Some("hero-banner".to_string()),
                show_video: true,
            })
            .await
            .unwrap();

        let channel = channel_usecase.set_show_video(false).await.unwrap();
        assert!(!channel.show_video);
        assert_eq!(channel.headline, "Find your place at Crestmont");
        assert!(!channel.wants_video());
    }
}
