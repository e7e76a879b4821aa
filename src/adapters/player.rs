//! Embed-URL player.
//!
//! Stands in for an iframe player: switching media means pointing the embed
//! at a new video id.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use super::MediaPlayer;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Player that tracks the embed URL of the current media
pub struct EmbedPlayer {
    base: String,
    current: Mutex<Option<String>>,
}

impl Default for EmbedPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbedPlayer {
    pub fn new() -> Self {
        Self::with_base(EMBED_BASE)
    }

    /// Use a different embed endpoint
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            current: Mutex::new(None),
        }
    }

    /// Embed URL for a media id
    pub fn embed_url(&self, media_id: &str) -> String {
        format!("{}{}", self.base, media_id)
    }

    /// URL of the media currently loaded
    pub async fn current_url(&self) -> Option<String> {
        self.current.lock().await.clone()
    }
}

#[async_trait]
impl MediaPlayer for EmbedPlayer {
    fn name(&self) -> &str {
        "embed"
    }

    async fn load_media(&self, media_id: &str) -> Result<()> {
        let media_id = media_id.trim();
        if media_id.is_empty() {
            anyhow::bail!("Empty media id");
        }

        let url = self.embed_url(media_id);
        info!(%url, "Switching media");
        *self.current.lock().await = Some(url);
        Ok(())
    }
}
