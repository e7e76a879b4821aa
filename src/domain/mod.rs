//! Domain types for the media catalog.
//!
//! This module contains the core data structures:
//! - Entries: documents and streams as written to metadata files
//! - Defaults: the hardcoded lists used when nothing else is available
//! - Library: the pair of lists a viewer session works on

pub mod defaults;
pub mod entry;
pub mod library;

// Re-export commonly used types
pub use defaults::{default_documents, default_streams, DEFAULT_DOCUMENT_COUNT};
pub use entry::{CatalogEntry, MediaKind, StreamEntry, StreamKind};
pub use library::Library;
