//! Offline catalog generation and metadata file handling.
//!
//! # Output
//!
//! ```text
//! <root>/data/
//! ├── pdfs.json      # [{ id, filename, title, path }, ...]
//! └── youtube.json   # [{ id, title, description, kind }, ...]
//! ```

pub mod catalog;
pub mod generator;
pub mod naming;

pub use catalog::{parse_catalog, write_catalog};
pub use generator::{
    generate_document_catalog, generate_stream_catalog, parse_stream_config, run_generator,
    GenerateError, GenerateReport, Generated,
};
pub use naming::{NamingPattern, NumberedFile};
