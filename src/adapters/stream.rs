//! Stream adapter: switches the player to an entry and fills the info panel.
//!
//! The player is attached once it has finished initializing. Requests that
//! arrive before that are dropped with a warning; nothing is queued.
//!
//! Player switches run one at a time in request order. A request that was
//! superseded while waiting for its turn never reaches the player, so the
//! player and the info panel always end on the same entry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info, warn};

use super::{LoadOutcome, MediaPlayer, ViewerError};
use crate::domain::{MediaKind, StreamEntry};

/// Info panel contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamInfo {
    pub title: String,
    pub description: String,
}

type PlayerSlot = Option<Arc<dyn MediaPlayer>>;

/// Wraps a [`MediaPlayer`] that may become ready after construction
pub struct StreamAdapter {
    player_tx: watch::Sender<PlayerSlot>,
    player_rx: watch::Receiver<PlayerSlot>,
    latest: AtomicU64,
    switching: Mutex<()>,
    info: Mutex<Option<StreamInfo>>,
}

impl Default for StreamAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamAdapter {
    /// Create an adapter whose player is not ready yet
    pub fn new() -> Self {
        let (player_tx, player_rx) = watch::channel(None);
        Self {
            player_tx,
            player_rx,
            latest: AtomicU64::new(0),
            switching: Mutex::new(()),
            info: Mutex::new(None),
        }
    }

    /// Create an adapter with a ready player
    pub fn with_player(player: Arc<dyn MediaPlayer>) -> Self {
        let adapter = Self::new();
        adapter.attach_player(player);
        adapter
    }

    /// Mark the player as initialized
    pub fn attach_player(&self, player: Arc<dyn MediaPlayer>) {
        info!(player = player.name(), "Player ready");
        self.player_tx.send_replace(Some(player));
    }

    pub fn is_ready(&self) -> bool {
        self.player_rx.borrow().is_some()
    }

    /// Wait until a player has been attached
    pub async fn ready(&self) {
        let mut rx = self.player_rx.clone();
        // The sender lives in `self`, so the channel cannot close while we wait
        let _ = rx.wait_for(|slot| slot.is_some()).await;
    }

    fn player(&self) -> Result<Arc<dyn MediaPlayer>, ViewerError> {
        self.player_rx
            .borrow()
            .as_ref()
            .map(Arc::clone)
            .ok_or(ViewerError::PlayerNotReady)
    }

    fn is_latest(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }

    /// Current info panel contents
    pub async fn info(&self) -> Option<StreamInfo> {
        self.info.lock().await.clone()
    }

    /// Switch the player to `entries[index]`
    pub async fn load_at(
        &self,
        entries: &[StreamEntry],
        index: usize,
    ) -> Result<LoadOutcome, ViewerError> {
        let entry = entries.get(index).ok_or(ViewerError::InvalidIndex {
            kind: MediaKind::Stream,
            index,
        })?;

        let player = match self.player() {
            Ok(player) => player,
            Err(e) => {
                warn!(id = %entry.id, error = %e, "Dropping stream request");
                return Ok(LoadOutcome::Dropped);
            }
        };

        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        // Held until the info panel is updated; tokio's Mutex is FIFO
        let _switching = self.switching.lock().await;
        if !self.is_latest(token) {
            debug!(id = %entry.id, token, "Skipping superseded stream request");
            return Ok(LoadOutcome::Superseded);
        }

        let result = player.load_media(&entry.id).await;

        let mut info = self.info.lock().await;
        if !self.is_latest(token) {
            // The newer request is queued behind us and will switch the player again
            debug!(id = %entry.id, token, "Discarding stale stream load");
            return Ok(LoadOutcome::Superseded);
        }

        if let Err(e) = result {
            error!(id = %entry.id, error = %format!("{:#}", e), "Player rejected media");
            return Err(ViewerError::RenderFailure {
                kind: MediaKind::Stream,
                filename: entry.id.clone(),
                reason: format!("{:#}", e),
            });
        }

        *info = Some(StreamInfo {
            title: entry.title.clone(),
            description: entry.description.clone(),
        });
        Ok(LoadOutcome::Loaded)
    }
}
