//! Runtime catalog loading.
//!
//! Each list is resolved by an ordered chain of tiers; the first tier that
//! produces a non-empty list wins and the hardcoded defaults close the chain,
//! so loading never fails.
//!
//! | Kind     | Tiers                          |
//! |----------|--------------------------------|
//! | Document | metadata → probe → default     |
//! | Stream   | metadata → default             |

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use serde::de::DeserializeOwned;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::source::{CatalogSource, FsSource, HttpSource, LoadError};
use crate::config::{ProbeSettings, ResolvedConfig};
use crate::domain::entry::{join_relative, pad2};
use crate::domain::{default_documents, default_streams, CatalogEntry, Library, MediaKind, StreamEntry};
use crate::library::parse_catalog;

/// One step of the fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Published metadata file
    Metadata,
    /// Existence checks against conventionally named files
    Probe,
    /// Hardcoded list
    Default,
}

impl Tier {
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Metadata => "metadata",
            Tier::Probe => "probe",
            Tier::Default => "default",
        }
    }
}

const DOCUMENT_TIERS: [Tier; 2] = [Tier::Metadata, Tier::Probe];
const STREAM_TIERS: [Tier; 1] = [Tier::Metadata];

/// A resolved list and the tier that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub entries: Vec<T>,
    pub tier: Tier,
}

/// Walk `tiers` in order, returning the first non-empty result
async fn first_non_empty<T, F, Fut>(
    kind: MediaKind,
    tiers: &[Tier],
    mut attempt: F,
    default: impl FnOnce() -> Vec<T>,
) -> Loaded<T>
where
    F: FnMut(Tier) -> Fut,
    Fut: Future<Output = Result<Vec<T>, LoadError>>,
{
    for &tier in tiers {
        match attempt(tier).await {
            Ok(entries) if !entries.is_empty() => {
                info!(%kind, tier = tier.name(), count = entries.len(), "Catalog loaded");
                return Loaded { entries, tier };
            }
            Ok(_) => debug!(%kind, tier = tier.name(), "Tier yielded no entries"),
            Err(e) => warn!(%kind, tier = tier.name(), error = %e, "Tier failed, falling back"),
        }
    }

    let entries = default();
    info!(%kind, tier = Tier::Default.name(), count = entries.len(), "Catalog loaded");
    Loaded {
        entries,
        tier: Tier::Default,
    }
}

/// Loads document and stream lists from a [`CatalogSource`]
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
}

impl CatalogLoader {
    /// Create a loader over an explicit source
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// HTTP source when a base URL is configured, the local root otherwise
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, LoadError> {
        let source: Arc<dyn CatalogSource> = match config.base_url {
            Some(ref url) => Arc::new(HttpSource::new(url, HttpSource::DEFAULT_TIMEOUT)?),
            None => Arc::new(FsSource::new(&config.root)),
        };
        Ok(Self::new(source))
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Fetch and parse a metadata file
    async fn fetch_list<T: DeserializeOwned>(&self, location: &str) -> Result<Vec<T>, LoadError> {
        let body = self.source.fetch(location).await?;
        let entries: Vec<T> = parse_catalog(&body).map_err(|source| LoadError::Parse {
            location: location.to_string(),
            source,
        })?;

        if entries.is_empty() {
            return Err(LoadError::EmptyResult {
                location: location.to_string(),
            });
        }
        Ok(entries)
    }

    /// Check candidates `01..=max` concurrently, each bounded by the probe timeout.
    ///
    /// Hits keep numeric order and are renumbered by position.
    async fn probe(&self, settings: &ProbeSettings) -> Result<Vec<CatalogEntry>, LoadError> {
        let checks = (1..=settings.max_candidates).map(|number| {
            let filename = settings.candidate(number);
            let location = join_relative(&settings.directory, &filename);
            async move {
                match timeout(settings.timeout, self.source.exists(&location)).await {
                    Ok(true) => Some((number, filename)),
                    Ok(false) => None,
                    Err(_) => {
                        debug!(%location, "Probe timed out");
                        None
                    }
                }
            }
        });

        let entries: Vec<_> = join_all(checks)
            .await
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(index, (number, filename))| {
                CatalogEntry::new((index + 1) as u32, filename, &pad2(number), &settings.directory)
            })
            .collect();

        if entries.is_empty() {
            return Err(LoadError::EmptyResult {
                location: settings.directory.clone(),
            });
        }
        Ok(entries)
    }

    /// Resolve the document list: metadata, then probing, then defaults
    pub async fn load_catalog(&self, metadata: &str, settings: &ProbeSettings) -> Loaded<CatalogEntry> {
        first_non_empty(
            MediaKind::Document,
            &DOCUMENT_TIERS,
            |tier| async move {
                match tier {
                    Tier::Metadata => self.fetch_list(metadata).await,
                    Tier::Probe => self.probe(settings).await,
                    Tier::Default => Ok(Vec::new()),
                }
            },
            || default_documents(&settings.prefix, &settings.extension, &settings.directory),
        )
        .await
    }

    /// Resolve the stream list: metadata, then defaults
    pub async fn load_streams(&self, metadata: &str) -> Loaded<StreamEntry> {
        first_non_empty(
            MediaKind::Stream,
            &STREAM_TIERS,
            |_| self.fetch_list::<StreamEntry>(metadata),
            default_streams,
        )
        .await
    }

    /// Load both lists concurrently
    pub async fn load_library(&self, config: &ResolvedConfig) -> Library {
        let documents_metadata = config.documents_metadata();
        let streams_metadata = config.streams_metadata();

        let (documents, streams) = tokio::join!(
            self.load_catalog(&documents_metadata, &config.probe),
            self.load_streams(&streams_metadata),
        );

        Library::new(documents.entries, streams.entries)
    }
}
