//! Canonical site-relative locations.
//!
//! Single source of truth - import this instead of hardcoding paths.
//!
//! ## Layout
//!
//! ```text
//! <root>/
//! ├── assets/pdfs/              # pdf01.pdf, pdf02.pdf, ...
//! ├── config/youtube-videos.txt # id,title,description per line
//! └── data/
//!     ├── pdfs.json             # written by `mediashelf generate`
//!     └── youtube.json
//! ```

/// Document directory
pub const DOCUMENTS_DIR: &str = "assets/pdfs";

/// Metadata directory
pub const DATA_DIR: &str = "data";

/// Document metadata filename inside [`DATA_DIR`]
pub const DOCUMENTS_METADATA: &str = "pdfs.json";

/// Stream metadata filename inside [`DATA_DIR`]
pub const STREAMS_METADATA: &str = "youtube.json";

/// Line-delimited stream config read by the generator
pub const STREAM_CONFIG: &str = "config/youtube-videos.txt";
