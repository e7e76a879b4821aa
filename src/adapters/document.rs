//! Document adapter: opens an entry, shows page 1 and tracks the page position.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

use super::{DocumentRenderer, LoadOutcome, RenderedDocument, ViewerError};
use crate::domain::{CatalogEntry, MediaKind};

/// Page-position display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DocumentStatus {
    /// Nothing opened yet
    #[default]
    Idle,
    Loading { filename: String },
    Page { page: u32, total: u32 },
    Failed { filename: String },
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Idle => Ok(()),
            DocumentStatus::Loading { .. } => write!(f, "載入中..."),
            DocumentStatus::Page { page, total } => write!(f, "第 {} 頁 / 共 {} 頁", page, total),
            DocumentStatus::Failed { .. } => write!(f, "載入失敗"),
        }
    }
}

struct OpenDocument {
    document: Arc<dyn RenderedDocument>,
    filename: String,
    page: u32,
}

#[derive(Default)]
struct DisplayState {
    status: DocumentStatus,
    open: Option<OpenDocument>,
    content: Option<String>,
}

/// Wraps a [`DocumentRenderer`]; only the latest request may update the display
pub struct DocumentAdapter {
    renderer: Arc<dyn DocumentRenderer>,
    latest: AtomicU64,
    display: Mutex<DisplayState>,
}

impl DocumentAdapter {
    pub fn new(renderer: Arc<dyn DocumentRenderer>) -> Self {
        Self {
            renderer,
            latest: AtomicU64::new(0),
            display: Mutex::new(DisplayState::default()),
        }
    }

    fn issue_token(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }

    /// Current page-position display
    pub async fn status(&self) -> DocumentStatus {
        self.display.lock().await.status.clone()
    }

    /// Content of the rendered page, if any
    pub async fn page_content(&self) -> Option<String> {
        self.display.lock().await.content.clone()
    }

    async fn open_first_page(
        &self,
        entry: &CatalogEntry,
    ) -> anyhow::Result<(Arc<dyn RenderedDocument>, String)> {
        let document = self.renderer.open(&entry.path).await?;
        let content = document.render_page(1).await?;
        Ok((document, content))
    }

    /// Open `entries[index]` and render its first page
    #[instrument(skip(self, entries))]
    pub async fn load_at(
        &self,
        entries: &[CatalogEntry],
        index: usize,
    ) -> Result<LoadOutcome, ViewerError> {
        let entry = entries.get(index).ok_or(ViewerError::InvalidIndex {
            kind: MediaKind::Document,
            index,
        })?;

        let token = self.issue_token();
        self.display.lock().await.status = DocumentStatus::Loading {
            filename: entry.filename.clone(),
        };

        let result = self.open_first_page(entry).await;

        let mut display = self.display.lock().await;
        if !self.is_latest(token) {
            debug!(filename = %entry.filename, token, "Discarding stale document load");
            return Ok(LoadOutcome::Superseded);
        }

        match result {
            Ok((document, content)) => {
                let total = document.page_count();
                info!(filename = %entry.filename, pages = total, renderer = self.renderer.name(), "Document opened");
                display.status = DocumentStatus::Page { page: 1, total };
                display.content = Some(content);
                display.open = Some(OpenDocument {
                    document,
                    filename: entry.filename.clone(),
                    page: 1,
                });
                Ok(LoadOutcome::Loaded)
            }
            Err(e) => {
                error!(filename = %entry.filename, error = %format!("{:#}", e), "Document load failed");
                display.status = DocumentStatus::Failed {
                    filename: entry.filename.clone(),
                };
                display.content = None;
                display.open = None;
                Err(ViewerError::RenderFailure {
                    kind: MediaKind::Document,
                    filename: entry.filename.clone(),
                    reason: format!("{:#}", e),
                })
            }
        }
    }

    /// Turn to the next page; `None` at the last page, with nothing open or while loading
    pub async fn next_page(&self) -> Result<Option<u32>, ViewerError> {
        self.turn_page(1).await
    }

    /// Turn to the previous page; `None` at page 1, with nothing open or while loading
    pub async fn prev_page(&self) -> Result<Option<u32>, ViewerError> {
        self.turn_page(-1).await
    }

    async fn turn_page(&self, delta: i64) -> Result<Option<u32>, ViewerError> {
        let mut display = self.display.lock().await;
        // The open document is about to be replaced
        if matches!(display.status, DocumentStatus::Loading { .. }) {
            return Ok(None);
        }
        let Some(open) = display.open.as_ref() else {
            return Ok(None);
        };

        let target = open.page as i64 + delta;
        let total = open.document.page_count();
        if target < 1 || target > total as i64 {
            return Ok(None);
        }
        let target = target as u32;

        let document = Arc::clone(&open.document);
        let filename = open.filename.clone();
        match document.render_page(target).await {
            Ok(content) => {
                display.status = DocumentStatus::Page {
                    page: target,
                    total,
                };
                display.content = Some(content);
                if let Some(open) = display.open.as_mut() {
                    open.page = target;
                }
                Ok(Some(target))
            }
            Err(e) => {
                error!(%filename, page = target, error = %format!("{:#}", e), "Page render failed");
                display.status = DocumentStatus::Failed {
                    filename: filename.clone(),
                };
                Err(ViewerError::RenderFailure {
                    kind: MediaKind::Document,
                    filename,
                    reason: format!("{:#}", e),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedDocument(u32);

    #[async_trait]
    impl RenderedDocument for FixedDocument {
        fn page_count(&self) -> u32 {
            self.0
        }

        async fn render_page(&self, page: u32) -> anyhow::Result<String> {
            Ok(format!("page {}", page))
        }
    }

    struct FixedRenderer;

    #[async_trait]
    impl DocumentRenderer for FixedRenderer {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn open(&self, path: &str) -> anyhow::Result<Arc<dyn RenderedDocument>> {
            if path.ends_with("broken.pdf") {
                anyhow::bail!("corrupt xref table");
            }
            Ok(Arc::new(FixedDocument(3)))
        }
    }

    fn entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new(1, "pdf01.pdf", "01", "assets/pdfs"),
            CatalogEntry::new(2, "broken.pdf", "02", "assets/pdfs"),
        ]
    }

    #[tokio::test]
    async fn test_load_shows_first_page() {
        let adapter = DocumentAdapter::new(Arc::new(FixedRenderer));

        let outcome = adapter.load_at(&entries(), 0).await.unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(adapter.status().await, DocumentStatus::Page { page: 1, total: 3 });
        assert_eq!(adapter.status().await.to_string(), "第 1 頁 / 共 3 頁");
        assert_eq!(adapter.page_content().await.as_deref(), Some("page 1"));
    }

    #[tokio::test]
    async fn test_failure_is_visible() {
        let adapter = DocumentAdapter::new(Arc::new(FixedRenderer));

        let err = adapter.load_at(&entries(), 1).await.unwrap_err();

        assert!(matches!(err, ViewerError::RenderFailure { ref filename, .. } if filename == "broken.pdf"));
        assert_eq!(adapter.status().await.to_string(), "載入失敗");
    }

    #[tokio::test]
    async fn test_page_turning_is_bounded() {
        let adapter = DocumentAdapter::new(Arc::new(FixedRenderer));
        assert_eq!(adapter.next_page().await.unwrap(), None);

        adapter.load_at(&entries(), 0).await.unwrap();

        assert_eq!(adapter.prev_page().await.unwrap(), None);
        assert_eq!(adapter.next_page().await.unwrap(), Some(2));
        assert_eq!(adapter.next_page().await.unwrap(), Some(3));
        assert_eq!(adapter.next_page().await.unwrap(), None);
        assert_eq!(adapter.status().await, DocumentStatus::Page { page: 3, total: 3 });
        assert_eq!(adapter.page_content().await.as_deref(), Some("page 3"));

        // A new document resets to page 1
        adapter.load_at(&entries(), 0).await.unwrap();
        assert_eq!(adapter.status().await, DocumentStatus::Page { page: 1, total: 3 });
    }

    #[tokio::test]
    async fn test_invalid_index() {
        let adapter = DocumentAdapter::new(Arc::new(FixedRenderer));

        assert!(matches!(
            adapter.load_at(&entries(), 9).await,
            Err(ViewerError::InvalidIndex { index: 9, .. })
        ));
        assert_eq!(adapter.status().await, DocumentStatus::Idle);
    }
}
