//! Homepage channel domain models.

use serde::{Deserialize, Serialize};

/// Singleton document controlling the homepage hero area.
///
/// When `show_video` is false (or no video URL is set) the rendering layer
/// falls back to the banner image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomepageChannel {
    pub headline: String,
    /// Hero video URL, if one is configured.
    pub video_url: Option<String>,
    /// Logical image key of the fallback banner.
    pub banner_image_key: Option<String>,
    /// Stored switch letting admins disable the video without deleting it.
    pub show_video: bool,
}

impl Default for HomepageChannel {
    fn default() -> Self {
        Self {
            headline: String::new(),
            video_url: None,
            banner_image_key: None,
            show_video: false,
        }
    }
}

impl HomepageChannel {
    /// Whether the rendering layer should attempt video playback.
    pub fn wants_video(&self) -> bool {
        self.show_video && self.video_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_video_requires_url_and_switch() {
        let mut channel = HomepageChannel::default();
        assert!(!channel.wants_video());

        channel.show_video = true;
        assert!(!channel.wants_video());

        channel.video_url = Some("https://cdn.example.com/tour.mp4".to_string());
        assert!(channel.wants_video());

        channel.show_video = false;
        assert!(!channel.wants_video());
    }
}
