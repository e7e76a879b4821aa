//! Offline catalog generation.
//!
//! Scans the document directory and the stream config file and writes the
//! two metadata files the loader reads. Unreadable inputs fall back to the
//! default lists; only write failures abort the run.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument, warn};

use super::catalog::write_catalog;
use super::naming::NamingPattern;
use crate::config::{ProbeSettings, ResolvedConfig};
use crate::domain::{default_documents, default_streams, CatalogEntry, StreamEntry};

/// Errors raised while generating metadata
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid naming pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A generated list and whether it came from the hardcoded defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Generated<T> {
    pub entries: Vec<T>,
    pub fallback: bool,
}

impl<T> Generated<T> {
    fn scanned(entries: Vec<T>) -> Self {
        Self {
            entries,
            fallback: false,
        }
    }

    fn fallback(entries: Vec<T>) -> Self {
        Self {
            entries,
            fallback: true,
        }
    }
}

/// Summary of a full generator run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub documents_path: PathBuf,
    pub documents: usize,
    pub documents_fallback: bool,
    pub streams_path: PathBuf,
    pub streams: usize,
    pub streams_fallback: bool,
}

/// List every regular file name in a directory
async fn list_file_names(dir: &Path) -> Result<Vec<String>, GenerateError> {
    let unavailable = |source| GenerateError::SourceUnavailable {
        path: dir.to_path_buf(),
        source,
    };

    let mut reader = fs::read_dir(dir).await.map_err(unavailable)?;
    let mut names = Vec::new();

    while let Some(entry) = reader.next_entry().await.map_err(unavailable)? {
        let is_file = fs::metadata(entry.path())
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if is_file {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(names)
}

/// Build the document list from a directory listing.
///
/// Ids follow the sorted position; titles follow the number in each filename.
#[instrument(skip(settings), fields(dir = %source_dir.display()))]
pub async fn generate_document_catalog(
    source_dir: &Path,
    settings: &ProbeSettings,
) -> Result<Generated<CatalogEntry>, GenerateError> {
    let pattern = NamingPattern::from_settings(settings)?;

    match list_file_names(source_dir).await {
        Ok(names) => {
            let files = pattern.select_sorted(names);
            let entries: Vec<_> = files
                .into_iter()
                .enumerate()
                .map(|(index, file)| {
                    CatalogEntry::new(
                        (index + 1) as u32,
                        file.filename,
                        &file.token,
                        &settings.directory,
                    )
                })
                .collect();

            info!(count = entries.len(), "Scanned document directory");
            Ok(Generated::scanned(entries))
        }
        Err(e) => {
            warn!(error = %e, "Document directory unreadable, using default list");
            Ok(Generated::fallback(default_documents(
                &settings.prefix,
                &settings.extension,
                &settings.directory,
            )))
        }
    }
}

/// Parse `id,title,description` lines.
///
/// Blank lines are ignored and do not count towards numbering. Lines whose id
/// is empty are skipped but still consume a number.
pub fn parse_stream_config(content: &str) -> Vec<StreamEntry> {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .filter_map(|(index, line)| {
            let mut fields = line.split(',').map(str::trim);
            let id = fields.next().unwrap_or_default();
            if id.is_empty() {
                return None;
            }

            let position = index + 1;
            let title = fields
                .next()
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| StreamEntry::synthesized_title(position));
            let description = fields
                .next()
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| StreamEntry::synthesized_description(position));

            Some(StreamEntry::new(id, title, description))
        })
        .collect()
}

/// Build the stream list from the optional config file
#[instrument(fields(config = %config_path.display()))]
pub async fn generate_stream_catalog(config_path: &Path) -> Generated<StreamEntry> {
    match fs::read_to_string(config_path).await {
        Ok(content) => {
            let entries = parse_stream_config(&content);
            info!(count = entries.len(), "Read stream config");
            Generated::scanned(entries)
        }
        Err(source) => {
            let e = GenerateError::SourceUnavailable {
                path: config_path.to_path_buf(),
                source,
            };
            warn!(error = %e, "No stream config, using default list");
            Generated::fallback(default_streams())
        }
    }
}

/// Generate and write both metadata files
pub async fn run_generator(config: &ResolvedConfig) -> Result<GenerateReport, GenerateError> {
    let documents = generate_document_catalog(&config.documents_dir(), &config.probe).await?;
    let documents_path = config.root.join(config.documents_metadata());
    write_catalog(&documents_path, &documents.entries).await?;
    info!(
        path = %documents_path.display(),
        count = documents.entries.len(),
        "Wrote document catalog"
    );

    let streams = generate_stream_catalog(&config.stream_config_path()).await;
    let streams_path = config.root.join(config.streams_metadata());
    write_catalog(&streams_path, &streams.entries).await?;
    info!(
        path = %streams_path.display(),
        count = streams.entries.len(),
        "Wrote stream catalog"
    );

    Ok(GenerateReport {
        documents_path,
        documents: documents.entries.len(),
        documents_fallback: documents.fallback,
        streams_path,
        streams: streams.entries.len(),
        streams_fallback: streams.fallback,
    })
}
