//! Application state for one viewing session.
//!
//! Owns the selection controller and both adapters. Navigation first updates
//! the selection, then asks the matching adapter to load the new index.
//! Methods take `&self`, so overlapping navigation is possible; the adapters'
//! request tokens make sure only the newest load reaches the display.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use super::selection::SelectionController;
use crate::adapters::{
    DocumentAdapter, DocumentRenderer, LoadOutcome, MediaPlayer, StreamAdapter, ViewerError,
};
use crate::domain::{Library, MediaKind};

/// Selection plus rendering for both media kinds
pub struct Viewer {
    library: Arc<Library>,
    controller: Mutex<SelectionController>,
    documents: DocumentAdapter,
    streams: StreamAdapter,
}

impl Viewer {
    /// Create a viewer; the player may be attached later through [`Viewer::streams`]
    pub fn new(
        library: Library,
        renderer: Arc<dyn DocumentRenderer>,
        player: Option<Arc<dyn MediaPlayer>>,
    ) -> Self {
        let library = Arc::new(library);
        let streams = match player {
            Some(player) => StreamAdapter::with_player(player),
            None => StreamAdapter::new(),
        };

        Self {
            controller: Mutex::new(SelectionController::new(Arc::clone(&library))),
            library,
            documents: DocumentAdapter::new(renderer),
            streams,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn documents(&self) -> &DocumentAdapter {
        &self.documents
    }

    pub fn streams(&self) -> &StreamAdapter {
        &self.streams
    }

    /// Current index of a kind
    pub async fn current(&self, kind: MediaKind) -> Option<usize> {
        self.controller.lock().await.current(kind)
    }

    /// Select from raw input (dropdown value or typed number)
    pub async fn select(&self, kind: MediaKind, raw: &str) -> Result<Option<LoadOutcome>, ViewerError> {
        let index = self.controller.lock().await.select_input(kind, raw);
        self.load_selected(kind, index).await
    }

    /// Select an explicit index
    pub async fn select_index(&self, kind: MediaKind, index: usize) -> Result<Option<LoadOutcome>, ViewerError> {
        let index = self.controller.lock().await.select_index(kind, index);
        self.load_selected(kind, index).await
    }

    pub async fn next(&self, kind: MediaKind) -> Result<Option<LoadOutcome>, ViewerError> {
        let index = self.controller.lock().await.next(kind);
        self.load_selected(kind, index).await
    }

    pub async fn previous(&self, kind: MediaKind) -> Result<Option<LoadOutcome>, ViewerError> {
        let index = self.controller.lock().await.previous(kind);
        self.load_selected(kind, index).await
    }

    async fn load_selected(
        &self,
        kind: MediaKind,
        index: Option<usize>,
    ) -> Result<Option<LoadOutcome>, ViewerError> {
        let Some(index) = index else {
            debug!(%kind, "Navigation request ignored");
            return Ok(None);
        };

        let outcome = match kind {
            MediaKind::Document => self.documents.load_at(self.library.documents(), index).await?,
            MediaKind::Stream => self.streams.load_at(self.library.streams(), index).await?,
        };
        Ok(Some(outcome))
    }
}
