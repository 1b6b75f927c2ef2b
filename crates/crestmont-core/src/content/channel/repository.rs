//! Homepage channel repository trait.

use async_trait::async_trait;

use super::model::HomepageChannel;
use crate::error::Result;

/// Repository for the single homepage channel document.
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Loads the channel. Returns the default when none was saved yet.
    async fn load(&self) -> Result<HomepageChannel>;

    async fn save(&self, channel: &HomepageChannel) -> Result<()>;
}
