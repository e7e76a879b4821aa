//! Catalog and stream entries.
//!
//! Both types serialize with the exact key names the metadata files use,
//! so a generated `pdfs.json` / `youtube.json` round-trips unchanged.

use serde::{Deserialize, Serialize};

/// Label prefix for document titles ("PDF 文件 07")
pub const DOCUMENT_TITLE_PREFIX: &str = "PDF 文件";

/// Zero-pad a 1-based number to two digits ("7" -> "07")
pub fn pad2(n: usize) -> String {
    format!("{:02}", n)
}

/// One document in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// 1-based position in the list
    pub id: u32,

    /// Bare filename, e.g. `pdf03.pdf`
    pub filename: String,

    /// Human-readable label
    pub title: String,

    /// Location relative to the site root, e.g. `assets/pdfs/pdf03.pdf`
    pub path: String,
}

impl CatalogEntry {
    /// Build an entry for `filename` inside `directory`.
    ///
    /// `number_token` is the digit run taken from the filename as written,
    /// not the list position, so titles keep gaps (`pdf07.pdf` -> "PDF 文件 07").
    pub fn new(id: u32, filename: impl Into<String>, number_token: &str, directory: &str) -> Self {
        let filename = filename.into();
        let path = join_relative(directory, &filename);
        Self {
            id,
            title: format!("{} {}", DOCUMENT_TITLE_PREFIX, number_token),
            filename,
            path,
        }
    }
}

/// Marker stored in every stream entry's `kind` field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    /// Externally hosted, playable by id
    #[default]
    #[serde(alias = "youtube")]
    Stream,
}

/// One externally hosted playable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEntry {
    /// External media identifier (never empty)
    pub id: String,

    /// Human-readable label
    pub title: String,

    /// Short description shown in the info panel
    #[serde(default)]
    pub description: String,

    /// Always `"stream"`; older files wrote `"type": "youtube"`
    #[serde(default, alias = "type")]
    pub kind: StreamKind,
}

impl StreamEntry {
    /// Create a stream entry
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            kind: StreamKind::Stream,
        }
    }

    /// Title used when a config line leaves it blank
    pub fn synthesized_title(position: usize) -> String {
        format!("YouTube 音訊 {}", pad2(position))
    }

    /// Description used when a config line leaves it blank
    pub fn synthesized_description(position: usize) -> String {
        format!("第 {} 個 YouTube 音訊", pad2(position))
    }
}

/// The two independent media lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Document,
    Stream,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Document => write!(f, "document"),
            MediaKind::Stream => write!(f, "stream"),
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "document" | "doc" | "pdf" => Ok(MediaKind::Document),
            "stream" | "video" | "yt" | "youtube" => Ok(MediaKind::Stream),
            _ => anyhow::bail!("Unknown media kind: {}", s),
        }
    }
}

/// Join a relative directory and a filename with `/`, tolerating a trailing slash
pub(crate) fn join_relative(directory: &str, filename: &str) -> String {
    let directory = directory.trim_end_matches('/');
    if directory.is_empty() {
        filename.to_string()
    } else {
        format!("{}/{}", directory, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_title_uses_token() {
        let entry = CatalogEntry::new(2, "pdf07.pdf", "07", "assets/pdfs/");

        assert_eq!(entry.id, 2);
        assert_eq!(entry.title, "PDF 文件 07");
        assert_eq!(entry.path, "assets/pdfs/pdf07.pdf");
    }

    #[test]
    fn test_catalog_entry_keys() {
        let entry = CatalogEntry::new(1, "pdf01.pdf", "01", "assets/pdfs");
        let value = serde_json::to_value(&entry).unwrap();

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        for key in ["id", "filename", "title", "path"] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_stream_entry_serializes_kind() {
        let entry = StreamEntry::new("abc123", "Title", "Desc");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["kind"], "stream");
        assert_eq!(json["id"], "abc123");
    }

    #[test]
    fn test_stream_entry_accepts_legacy_type_key() {
        let json = r#"{"id":"dQw4w9WgXcQ","title":"T","description":"D","type":"youtube"}"#;
        let entry: StreamEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.kind, StreamKind::Stream);
        assert_eq!(entry.id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_synthesized_labels_are_padded() {
        assert_eq!(StreamEntry::synthesized_title(3), "YouTube 音訊 03");
        assert_eq!(StreamEntry::synthesized_description(1), "第 01 個 YouTube 音訊");
        assert_eq!(StreamEntry::synthesized_description(12), "第 12 個 YouTube 音訊");
    }

    #[test]
    fn test_media_kind_from_str() {
        assert_eq!("pdf".parse::<MediaKind>().unwrap(), MediaKind::Document);
        assert_eq!("YT".parse::<MediaKind>().unwrap(), MediaKind::Stream);
        assert!("audio".parse::<MediaKind>().is_err());
    }
}
