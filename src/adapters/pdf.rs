//! PDF renderer backed by lopdf.
//!
//! Pages are "rendered" as their extracted text, which is what a terminal
//! can display. Parsing and extraction run once per open on the blocking
//! pool; the parsed document itself never leaves that thread.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::{DocumentRenderer, RenderedDocument};

/// Opens PDFs relative to the site root
pub struct PdfRenderer {
    root: PathBuf,
}

impl PdfRenderer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Text of every page, or the reason a page could not be extracted
struct PdfDocument {
    pages: Vec<Result<String, String>>,
}

fn extract_pages(path: &Path) -> Result<PdfDocument> {
    let document = lopdf::Document::load(path)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("Failed to open PDF: {}", path.display()))?;

    let pages = document
        .get_pages()
        .keys()
        .map(|&number| document.extract_text(&[number]).map_err(|e| e.to_string()))
        .collect();

    Ok(PdfDocument { pages })
}

#[async_trait]
impl RenderedDocument for PdfDocument {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    async fn render_page(&self, page: u32) -> Result<String> {
        let index = (page as usize)
            .checked_sub(1)
            .filter(|&i| i < self.pages.len())
            .with_context(|| format!("Page {} out of range (1-{})", page, self.pages.len()))?;

        match &self.pages[index] {
            Ok(text) => Ok(text.clone()),
            Err(reason) => anyhow::bail!("Failed to extract text from page {}: {}", page, reason),
        }
    }
}

#[async_trait]
impl DocumentRenderer for PdfRenderer {
    fn name(&self) -> &str {
        "lopdf"
    }

    async fn open(&self, path: &str) -> Result<Arc<dyn RenderedDocument>> {
        let full_path = self.root.join(path.trim_start_matches('/'));

        let document = tokio::task::spawn_blocking(move || extract_pages(&full_path))
            .await
            .context("PDF loader task failed")??;

        Ok(Arc::new(document))
    }
}
