//! Runtime logic.
//!
//! This module contains:
//! - Source: where catalogs are read from (HTTP or local root)
//! - Loader: the metadata → probe → default chain
//! - Selection: per-kind selection state
//! - Options: dropdown rendering
//! - Viewer: session state tying selection to the adapters

pub mod loader;
pub mod options;
pub mod selection;
pub mod source;
pub mod viewer;

// Re-export commonly used types
pub use loader::{CatalogLoader, Loaded, Tier};
pub use options::{dropdown_options, placeholder, SelectOption};
pub use selection::{SelectionController, SelectionState};
pub use source::{CatalogSource, FsSource, HttpSource, LoadError};
pub use viewer::Viewer;
