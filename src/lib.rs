//! mediashelf - static document and stream catalog
//!
//! Lists PDF documents and externally hosted streams, lets a user pick one
//! by index or step through with next/previous, and hands the choice to a
//! viewer adapter.
//!
//! # Architecture
//!
//! - An offline generator writes `data/pdfs.json` and `data/youtube.json`
//! - At runtime a loader resolves each list through a fallback chain
//!   (metadata file → probing by filename → hardcoded defaults)
//! - A selection controller tracks one index per list
//! - Adapters wrap the external document renderer and media player
//!
//! # Modules
//!
//! - `adapters`: Viewer integrations (lopdf renderer, embed player)
//! - `core`: Loader, selection and session state
//! - `domain`: Data structures (CatalogEntry, StreamEntry, Library)
//! - `library`: Offline metadata generation
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Generate metadata for the site in the current directory
//! mediashelf
//!
//! # Show what a browser would list
//! mediashelf list --base-url http://localhost:8080/
//!
//! # Step through documents and streams
//! mediashelf browse
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod feedback;
pub mod library;

// Re-export main types at crate root for convenience
pub use crate::core::{CatalogLoader, SelectionController, Viewer};
pub use domain::{CatalogEntry, Library, MediaKind, StreamEntry};
pub use feedback::FeedbackForm;
pub use library::{run_generator, GenerateError};
