//! Adapter interfaces for the external viewers.
//!
//! The document renderer and the media player are collaborators outside this
//! crate. Adapters wrap them behind a "load item at index" contract and keep
//! the display state (page position, info panel) in sync with the latest
//! request only.

pub mod document;
pub mod pdf;
pub mod player;
pub mod stream;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::MediaKind;

// Re-export the concrete adapters
pub use document::{DocumentAdapter, DocumentStatus};
pub use pdf::PdfRenderer;
pub use player::EmbedPlayer;
pub use stream::{StreamAdapter, StreamInfo};

/// Errors surfaced by viewer adapters
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Failed to load {kind} {filename}: {reason}")]
    RenderFailure {
        kind: MediaKind,
        filename: String,
        reason: String,
    },

    #[error("Player is not ready")]
    PlayerNotReady,

    #[error("No {kind} entry at index {index}")]
    InvalidIndex { kind: MediaKind, index: usize },
}

/// What became of a load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The item is now displayed
    Loaded,
    /// A newer request finished first or is still running; result discarded
    Superseded,
    /// The request was not executed
    Dropped,
}

/// An opened paginated document
#[async_trait]
pub trait RenderedDocument: Send + Sync {
    /// Total number of pages
    fn page_count(&self) -> u32;

    /// Render a 1-based page, returning its displayable content
    async fn render_page(&self, page: u32) -> Result<String>;
}

/// Trait for external document renderers
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// Human-readable renderer name
    fn name(&self) -> &str;

    /// Open the document at a site-relative path
    async fn open(&self, path: &str) -> Result<Arc<dyn RenderedDocument>>;
}

/// Trait for external media players
#[async_trait]
pub trait MediaPlayer: Send + Sync {
    /// Human-readable player name
    fn name(&self) -> &str;

    /// Switch playback to the given external media id
    async fn load_media(&self, media_id: &str) -> Result<()>;
}
