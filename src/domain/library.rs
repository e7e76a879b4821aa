//! The lists a viewer session navigates.

use super::entry::{CatalogEntry, MediaKind, StreamEntry};

/// Document and stream lists, fixed for the lifetime of a session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    documents: Vec<CatalogEntry>,
    streams: Vec<StreamEntry>,
}

impl Library {
    /// Create a library from loaded lists
    pub fn new(documents: Vec<CatalogEntry>, streams: Vec<StreamEntry>) -> Self {
        Self { documents, streams }
    }

    pub fn documents(&self) -> &[CatalogEntry] {
        &self.documents
    }

    pub fn streams(&self) -> &[StreamEntry] {
        &self.streams
    }

    /// Number of entries of a kind
    pub fn len(&self, kind: MediaKind) -> usize {
        match kind {
            MediaKind::Document => self.documents.len(),
            MediaKind::Stream => self.streams.len(),
        }
    }

    /// Whether both lists are empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty() && self.streams.is_empty()
    }

    /// Titles of a kind in display order
    pub fn titles(&self, kind: MediaKind) -> Vec<&str> {
        match kind {
            MediaKind::Document => self.documents.iter().map(|d| d.title.as_str()).collect(),
            MediaKind::Stream => self.streams.iter().map(|s| s.title.as_str()).collect(),
        }
    }
}
