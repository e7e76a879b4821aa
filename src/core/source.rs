//! Where the loader reads from: a web server or a local site root.
//!
//! Both answer the same two questions: "give me this file" and "does this
//! file exist". A missing file on `exists` is an ordinary `false`, not an error.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

/// Errors the loader recovers from by moving to the next tier
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Fetch failed for {location}: {reason}")]
    FetchFailure { location: String, reason: String },

    #[error("Failed to parse {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{location} yielded no entries")]
    EmptyResult { location: String },

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),
}

impl LoadError {
    fn fetch(location: &str, reason: impl ToString) -> Self {
        LoadError::FetchFailure {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Read access to the published site
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Fetch a file; non-OK responses are errors
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError>;

    /// Existence check for a probe candidate
    async fn exists(&self, location: &str) -> bool;
}

/// Site served over HTTP
pub struct HttpSource {
    base: Url,
    client: reqwest::Client,
}

impl HttpSource {
    /// Default request timeout for metadata fetches
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a source rooted at `base_url`
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, LoadError> {
        let mut base = Url::parse(base_url)
            .map_err(|e| LoadError::SourceUnavailable(format!("invalid base URL {}: {}", base_url, e)))?;

        // Url::join drops the last segment unless the path ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| LoadError::SourceUnavailable(e.to_string()))?;

        Ok(Self { base, client })
    }

    fn url_for(&self, location: &str) -> Result<Url, LoadError> {
        self.base
            .join(location.trim_start_matches('/'))
            .map_err(|e| LoadError::fetch(location, e))
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError> {
        let url = self.url_for(location)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::fetch(location, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::fetch(location, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::fetch(location, e))?;

        Ok(body.to_vec())
    }

    async fn exists(&self, location: &str) -> bool {
        let Ok(url) = self.url_for(location) else {
            return false;
        };

        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(%location, error = %e, "Existence check failed");
                false
            }
        }
    }
}

/// Site on the local filesystem
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, location: &str) -> PathBuf {
        self.root.join(location.trim_start_matches('/'))
    }
}

#[async_trait]
impl CatalogSource for FsSource {
    fn name(&self) -> &str {
        "filesystem"
    }

    async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError> {
        fs::read(self.path_for(location))
            .await
            .map_err(|e| LoadError::fetch(location, e))
    }

    async fn exists(&self, location: &str) -> bool {
        fs::metadata(self.path_for(location))
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_http_source_keeps_base_path() {
        let source = HttpSource::new("http://example.com/site", HttpSource::DEFAULT_TIMEOUT).unwrap();

        assert_eq!(
            source.url_for("data/pdfs.json").unwrap().as_str(),
            "http://example.com/site/data/pdfs.json"
        );
        assert_eq!(
            source.url_for("/assets/pdfs/pdf01.pdf").unwrap().as_str(),
            "http://example.com/site/assets/pdfs/pdf01.pdf"
        );
    }

    #[test]
    fn test_http_source_rejects_bad_url() {
        assert!(matches!(
            HttpSource::new("not a url", HttpSource::DEFAULT_TIMEOUT),
            Err(LoadError::SourceUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_fs_source_fetch_and_exists() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("data")).await.unwrap();
        fs::write(temp.path().join("data/pdfs.json"), b"[]").await.unwrap();

        let source = FsSource::new(temp.path());

        assert_eq!(source.fetch("data/pdfs.json").await.unwrap(), b"[]");
        assert!(source.exists("data/pdfs.json").await);
        assert!(!source.exists("data").await);
        assert!(!source.exists("data/missing.json").await);
        assert!(matches!(
            source.fetch("data/missing.json").await,
            Err(LoadError::FetchFailure { .. })
        ));
    }
}
